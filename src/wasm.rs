use std::cell::RefCell;
use std::rc::Rc;

use folio_ui::DomSurface;
use wasm_bindgen::prelude::*;

use crate::config::GalleryConfig;
use crate::data::{HttpSource, load_document};
use crate::gallery::GalleryController;
use crate::message::GalleryMessage;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = GalleryConfig::default();
    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::log_1(&format!("Logger already initialized: {}", e).into());
    }

    wasm_bindgen_futures::spawn_local(async move {
        mount(config).await;
    });
}

/// Attach the gallery to the live document and load its data.
async fn mount(config: GalleryConfig) {
    let surface = match DomSurface::<GalleryMessage>::new() {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("Gallery not mounted: {}", e);
            return;
        }
    };
    let dispatcher = surface.dispatcher();
    let data_path = config.data_path.clone();

    let Some(controller) = GalleryController::new(surface, config) else {
        return;
    };
    let controller = Rc::new(RefCell::new(controller));

    let sink = Rc::clone(&controller);
    dispatcher.connect(move |message| match sink.try_borrow_mut() {
        Ok(mut controller) => controller.update(message),
        Err(_) => log::warn!("Gallery busy, dropped {:?}", message),
    });

    // The borrow must not be held across the fetch
    let result = load_document(&HttpSource, &data_path).await;
    match controller.try_borrow_mut() {
        Ok(mut controller) => controller.finish_load(result),
        Err(_) => log::error!("Gallery busy, load result dropped"),
    }

    log::info!("Gallery mounted");
}
