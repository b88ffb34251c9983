//! Browser host: the `wasm-bindgen` entry point that mounts the editor in a page.
//!
//! ARCHITECTURE
//! ============
//! [`MapEditor::start`] creates the canvas, appends it to the host container,
//! and wires window events into a shared [`Engine`]:
//!
//! - `scroll` / `resize` refresh the cached canvas bounds;
//! - `mousemove` updates the cursor cell;
//! - `mousedown` places a component using the page's color/width/height inputs;
//! - a [`RedrawLoop`] repaints every [`REDRAW_INTERVAL_MS`].
//!
//! Every listener and the timer are owned by the `MapEditor`. Calling
//! [`MapEditor::stop`] (or freeing the handle from JS) unregisters them all.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, EventTarget, File, HtmlAnchorElement, HtmlCanvasElement, HtmlInputElement, MouseEvent};

use crate::consts::{EXPORT_FILENAME, REDRAW_INTERVAL_MS};
use crate::engine::Engine;
use crate::grid::{GridConfig, Point};
use crate::input::{Selection, SelectionError};
use crate::transfer;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "host_test.rs"]
mod host_test;

static LOGGING: Once = Once::new();

/// Install the panic hook and route `log` records to the browser console.
///
/// Safe to call more than once; only the first call has an effect.
#[wasm_bindgen]
pub fn init() {
    LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("console logger unavailable: {err}")));
        }
    });
}

/// A DOM event listener that unregisters itself when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}

/// The repeating redraw task. Stopped explicitly or when dropped.
pub struct RedrawLoop {
    interval: Option<Interval>,
}

impl RedrawLoop {
    fn start(period_ms: u32, tick: impl FnMut() + 'static) -> Self {
        Self { interval: Some(Interval::new(period_ms, tick)) }
    }

    /// Cancel the timer. Further calls do nothing.
    pub fn stop(&mut self) {
        self.interval = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

/// The page's component controls, read fresh on every tick and click.
struct Controls {
    color: HtmlInputElement,
    width: HtmlInputElement,
    height: HtmlInputElement,
}

impl Controls {
    fn selection(&self) -> Result<Selection, SelectionError> {
        Selection::parse(&self.color.value(), &self.width.value(), &self.height.value())
    }
}

/// A mounted map editor.
#[wasm_bindgen]
pub struct MapEditor {
    engine: Rc<RefCell<Engine>>,
    redraw: RedrawLoop,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl MapEditor {
    /// Mount a default 50 × 30 grid of 15 px cells into `container_id`.
    ///
    /// # Errors
    ///
    /// Fails if any element id is missing or the canvas cannot be created.
    pub fn start(container_id: &str, color_id: &str, width_id: &str, height_id: &str) -> Result<MapEditor, JsValue> {
        Self::mount(container_id, color_id, width_id, height_id, GridConfig::default())
    }

    /// Like [`MapEditor::start`] with a custom grid.
    ///
    /// # Errors
    ///
    /// Fails if the grid has a zero dimension, an element id is missing, or the
    /// canvas cannot be created.
    #[wasm_bindgen(js_name = startWithGrid)]
    pub fn start_with_grid(
        container_id: &str,
        color_id: &str,
        width_id: &str,
        height_id: &str,
        cell_size: u32,
        columns: u32,
        rows: u32,
    ) -> Result<MapEditor, JsValue> {
        let grid = GridConfig::new(cell_size, columns, rows).map_err(|err| JsValue::from(JsError::from(err)))?;
        Self::mount(container_id, color_id, width_id, height_id, grid)
    }

    /// Remove every placed component.
    pub fn clear(&self) {
        self.engine.borrow_mut().core.clear();
    }

    /// Append the components in a map JSON string. Returns how many were added.
    ///
    /// # Errors
    ///
    /// Throws if the text is not a valid map; nothing is appended in that case.
    #[wasm_bindgen(js_name = importText)]
    pub fn import_text(&self, text: &str) -> Result<usize, JsError> {
        let added = self.engine.borrow_mut().core.import_json(text)?;
        Ok(added)
    }

    /// Read an attached file and append its components.
    ///
    /// The returned promise resolves with the number of components added, or
    /// rejects with the read or parse error. Redraws continue while the file
    /// is being read.
    #[wasm_bindgen(js_name = importFile)]
    pub fn import_file(&self, file: File) -> js_sys::Promise {
        let engine = Rc::clone(&self.engine);
        let name = file.name();
        wasm_bindgen_futures::future_to_promise(async move {
            let text = JsFuture::from(file.text())
                .await?
                .as_string()
                .ok_or_else(|| JsValue::from_str("file did not read as text"))?;
            let result = engine.borrow_mut().core.import_json(&text);
            match result {
                Ok(added) => Ok(JsValue::from(added)),
                Err(err) => {
                    log::error!("import of {name} failed: {err}");
                    Err(JsError::from(err).into())
                }
            }
        })
    }

    /// Point `anchor` at a `data:` URI of the current map, named `mapExport.json`.
    ///
    /// # Errors
    ///
    /// Throws if the map cannot be serialized.
    pub fn export(&self, anchor: &HtmlAnchorElement) -> Result<(), JsError> {
        let json = self.engine.borrow().core.export_json()?;
        anchor.set_href(&transfer::data_uri(&json));
        anchor.set_download(EXPORT_FILENAME);
        Ok(())
    }

    /// The current map as a JSON string.
    ///
    /// # Errors
    ///
    /// Throws if the map cannot be serialized.
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsError> {
        Ok(self.engine.borrow().core.export_json()?)
    }

    /// Number of placed components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.engine.borrow().core.components.len()
    }

    #[must_use]
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.engine.borrow().core.components.is_empty()
    }

    /// Whether the redraw timer is still active.
    #[must_use]
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.redraw.is_running()
    }

    /// Stop redrawing and detach every event listener. The canvas stays in
    /// the page showing its last frame.
    pub fn stop(&mut self) {
        self.redraw.stop();
        self.listeners.clear();
        log::info!("map editor stopped");
    }
}

impl MapEditor {
    fn mount(
        container_id: &str,
        color_id: &str,
        width_id: &str,
        height_id: &str,
        grid: GridConfig,
    ) -> Result<MapEditor, JsValue> {
        init();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| missing_element(container_id))?;
        let controls = Rc::new(Controls {
            color: input_by_id(&document, color_id)?,
            width: input_by_id(&document, width_id)?,
            height: input_by_id(&document, height_id)?,
        });

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_attribute("style", "cursor:none;")?;
        let engine = Rc::new(RefCell::new(Engine::new(canvas, grid)?));

        // Listeners first: if any registration fails the page is left untouched.
        let listeners = register_listeners(&window, &engine, &controls)?;
        container.append_child(engine.borrow().canvas())?;
        engine.borrow_mut().refresh_bounds();
        let redraw = start_redraw(&engine, &controls);

        log::info!(
            "map editor mounted in #{container_id} ({} x {} cells of {} px)",
            grid.columns(),
            grid.rows(),
            grid.cell_size()
        );
        Ok(MapEditor { engine, redraw, listeners })
    }
}

fn register_listeners(
    window: &web_sys::Window,
    engine: &Rc<RefCell<Engine>>,
    controls: &Rc<Controls>,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::with_capacity(4);

    for event in ["scroll", "resize"] {
        let engine = Rc::clone(engine);
        listeners.push(Listener::new(window, event, move |_ev| {
            engine.borrow_mut().refresh_bounds();
        })?);
    }

    {
        let engine = Rc::clone(engine);
        listeners.push(Listener::new(window, "mousemove", move |ev| {
            let Some(client) = client_point(ev) else {
                return;
            };
            engine.borrow_mut().on_pointer_move(client);
        })?);
    }

    {
        let engine = Rc::clone(engine);
        let controls = Rc::clone(controls);
        listeners.push(Listener::new(window, "mousedown", move |ev| {
            let Some(client) = client_point(ev) else {
                return;
            };
            let selection = match controls.selection() {
                Ok(selection) => selection,
                Err(err) => {
                    log::warn!("click ignored: {err}");
                    return;
                }
            };
            engine.borrow_mut().on_pointer_down(client, &selection);
        })?);
    }

    Ok(listeners)
}

fn start_redraw(engine: &Rc<RefCell<Engine>>, controls: &Rc<Controls>) -> RedrawLoop {
    let engine = Rc::clone(engine);
    let controls = Rc::clone(controls);
    RedrawLoop::start(REDRAW_INTERVAL_MS, move || {
        let selection = match controls.selection() {
            Ok(selection) => Some(selection),
            Err(err) => {
                log::debug!("preview skipped: {err}");
                None
            }
        };
        engine.borrow_mut().render(selection.as_ref());
    })
}

fn client_point(ev: Event) -> Option<Point> {
    let Ok(mouse) = ev.dyn_into::<MouseEvent>() else {
        return None;
    };
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

fn input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| missing_element(id))?;
    Ok(element.dyn_into::<HtmlInputElement>()?)
}

fn missing_element(id: &str) -> JsValue {
    JsValue::from_str(&format!("no element with id `{id}`"))
}
