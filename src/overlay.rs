//! JavaScript entry point: a border overlay bound to one grid container.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! const overlay = new BorderOverlay(holder, { overlap_bias: -1 });
//! overlay.render(table, [
//!   [{ width: 1, color: '#ccc' }, td, td, true, true, true, true],
//!   [{ kind: 'currentHighlight', priority: 1, width: 2, color: '#4b89ff' }, td, td, true, true, true, true],
//! ]);
//! ```

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::BorderRendererConfig;
use crate::error::BorderError;
use crate::render::{BorderRenderer, DomGeometry, DomSvgSurface};
use crate::types::{BorderRequest, StrokeStyle};

/// A border renderer drawing into an `<svg>` inside `container`.
#[wasm_bindgen]
pub struct BorderOverlay {
    renderer: BorderRenderer<DomSvgSurface>,
}

/// One request as received from JS, before styles are borrowed.
struct RawRequest {
    top_left: Element,
    bottom_right: Element,
    edges: [bool; 4],
}

fn element_at(entry: &Array, index: u32) -> Result<Element, BorderError> {
    entry
        .get(index)
        .dyn_into::<Element>()
        .map_err(|_| BorderError::Other(format!("request slot {index} is not an element")))
}

/// Edge flags in slots 3..=6, read with JS truthiness (`1`, `"yes"` count as set).
fn edge_flags(entry: &Array) -> [bool; 4] {
    [3, 4, 5, 6].map(|i| entry.get(i).is_truthy())
}

#[wasm_bindgen]
impl BorderOverlay {
    /// Attach an overlay to `container`. `config` may be `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: &Element, config: JsValue) -> Result<BorderOverlay, JsValue> {
        console_error_panic_hook::set_once();

        let config: BorderRendererConfig = if config.is_undefined() || config.is_null() {
            BorderRendererConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let surface = DomSvgSurface::new(container, config.z_index)?;
        Ok(Self {
            renderer: BorderRenderer::with_config(surface, config),
        })
    }

    /// Draw `requests` relative to `anchor`.
    ///
    /// Each request is `[style, firstCell, lastCell, hasTop, hasRight, hasBottom, hasLeft]`.
    pub fn render(&mut self, anchor: &Element, requests: &Array) -> Result<(), JsValue> {
        let mut styles: Vec<StrokeStyle> = Vec::with_capacity(requests.length() as usize);
        let mut raw: Vec<RawRequest> = Vec::with_capacity(requests.length() as usize);

        for entry in requests.iter() {
            let entry: Array = entry
                .dyn_into()
                .map_err(|_| BorderError::Other("request is not an array".into()))?;
            styles.push(serde_wasm_bindgen::from_value(entry.get(0))?);
            raw.push(RawRequest {
                top_left: element_at(&entry, 1)?,
                bottom_right: element_at(&entry, 2)?,
                edges: edge_flags(&entry),
            });
        }

        let requests: Vec<BorderRequest<'_, Element>> = styles
            .iter()
            .zip(raw)
            .map(|(style, r)| {
                let [top, right, bottom, left] = r.edges;
                BorderRequest::new(style, r.top_left, r.bottom_right)
                    .with_edges(top, right, bottom, left)
            })
            .collect();

        self.renderer.render(&DomGeometry, anchor, &requests)?;
        Ok(())
    }

    /// Width of the overlay after the last render.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.renderer.extent().width
    }

    /// Height of the overlay after the last render.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.renderer.extent().height
    }
}
