/// Headless gallery runner for native builds.
///
/// Usage: `folio-native [DATA_FILE] [FILTER]`
///
/// Loads the data document into an in-memory page, optionally selects a
/// category filter, and prints the resulting element tree.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use folio::{FileSource, GalleryConfig, GalleryController, page_scaffold};
    use folio_ui::Event;

    let config = GalleryConfig::load_from_default_path().unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let data_file = args.next().unwrap_or_else(|| config.data_path.clone());
    let filter = args.next();

    let path = Path::new(&data_file);
    let root = path.parent().unwrap_or_else(|| Path::new(""));
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        eprintln!("Invalid data file: {}", data_file);
        std::process::exit(2);
    };

    let mut filter_values = vec![folio::constants::ALL_FILTER];
    if let Some(filter) = filter.as_deref().filter(|&f| f != folio::constants::ALL_FILTER) {
        filter_values.push(filter);
    }

    let mut config = config;
    config.data_path = file_name.to_string();
    let transition = config.transition();

    let Some(mut controller) = GalleryController::new(page_scaffold(&filter_values), config) else {
        eprintln!("Page scaffold has no gallery container");
        std::process::exit(1);
    };

    pollster::block_on(controller.load(&FileSource::new(root)));

    if let Some(filter) = filter.as_deref() {
        let control = controller
            .filters()
            .controls()
            .iter()
            .find(|(_, key)| key.as_str() == filter)
            .map(|&(control, _)| control);
        match control {
            Some(control) => {
                controller.dispatch(Event::Click(control));
                controller.dispatch(Event::Tick(transition));
            }
            None => log::warn!("No filter control for {:?}", filter),
        }
    }

    print!("{}", controller.surface().outline());
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
