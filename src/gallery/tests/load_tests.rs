//! Tests for loading the data document into the gallery.

use super::*;
use crate::data::LoadError;
use crate::model::SiteDocument;

#[test]
fn test_missing_container_disables_gallery() {
    let surface = TestSurface::new();
    assert!(GalleryController::new(surface, GalleryConfig::default()).is_none());
}

#[test]
fn test_custom_container_id() {
    let mut surface = TestSurface::new();
    let root = surface.root();
    let host = surface.add(root, ElementKind::Block);
    surface.set_attribute(host, "id", "portfolio");

    let mut config = GalleryConfig::default();
    config.container_id = "portfolio".to_string();
    let controller = GalleryController::new(surface, config).unwrap();
    assert_eq!(controller.container(), host);
}

#[test]
fn test_missing_document_shows_error_text() {
    let mut controller = GalleryController::new(scaffold_page(), GalleryConfig::default()).unwrap();
    pollster::block_on(controller.load(&StaticSource::new()));

    let container = controller.container();
    let surface = controller.surface();
    assert_eq!(
        surface.text(container),
        Some(controller.config().text.load_failed.as_str())
    );
    assert!(surface.children(container).is_empty());
    assert!(controller.state().all_projects().is_empty());
    assert!(controller.filters().controls().is_empty());
    assert!(controller.lightbox().elements().is_none());
}

#[test]
fn test_malformed_document_shows_error_text() {
    let config = GalleryConfig::default();
    let source = StaticSource::new().with_document(config.data_path.clone(), "{ \"projetos\": [");
    let mut controller = GalleryController::new(scaffold_page(), config).unwrap();
    pollster::block_on(controller.load(&source));

    let container = controller.container();
    assert_eq!(
        controller.surface().text(container),
        Some("Erro ao carregar os projetos.")
    );
}

#[test]
fn test_failure_reported_from_any_error() {
    let mut controller = GalleryController::new(scaffold_page(), GalleryConfig::default()).unwrap();
    controller.finish_load(Err(LoadError::Status {
        path: "data/projetos.json".to_string(),
        status: 500,
    }));

    let container = controller.container();
    assert_eq!(controller.surface().text_content(container), "Erro ao carregar os projetos.");
}

#[test]
fn test_document_without_projects_leaves_gallery_untouched() {
    let mut controller = GalleryController::new(scaffold_page(), GalleryConfig::default()).unwrap();
    let before = controller.surface().outline();

    controller.finish_load(SiteDocument::from_json(r#"{ "faq": [] }"#).map_err(LoadError::from));

    assert_eq!(controller.surface().outline(), before);
    assert!(controller.filters().controls().is_empty());
}

#[test]
fn test_empty_project_list_shows_notice() {
    let controller = loaded_controller(&[]);

    let container = controller.container();
    let surface = controller.surface();
    let children = surface.children(container);
    assert_eq!(children.len(), 1);
    assert!(surface.has_class(children[0], classes::NO_PROJECTS));
    assert_eq!(controller.filters().controls().len(), FILTER_VALUES.len());
}

#[test]
fn test_load_reads_configured_path() {
    let mut config = GalleryConfig::default();
    config.data_path = "content/site.json".to_string();
    let source =
        StaticSource::new().with_document("content/site.json", document_json(&sample_projects()));

    let mut controller = GalleryController::new(scaffold_page(), config).unwrap();
    pollster::block_on(controller.load(&source));

    assert_eq!(controller.state().all_projects().len(), 3);
    assert_eq!(cards(&controller).len(), 3);
}

#[test]
fn test_other_arrays_are_ignored() {
    let json = r#"{
        "projetos": [
            {
                "titulo": "Loja",
                "descricao": "",
                "categoria": "web",
                "imagem": "a.jpg",
                "imagemFull": "b.jpg",
                "tecnologias": []
            }
        ],
        "faq": [{ "pergunta": "?", "resposta": "!" }],
        "servicos": []
    }"#;
    let config = GalleryConfig::default();
    let source = StaticSource::new().with_document(config.data_path.clone(), json);
    let mut controller = GalleryController::new(scaffold_page(), config).unwrap();
    pollster::block_on(controller.load(&source));

    assert_eq!(card_titles(&controller), vec!["Loja"]);
}

#[test]
fn test_split_fetch_matches_load() {
    let config = GalleryConfig::default();
    let source =
        StaticSource::new().with_document(config.data_path.clone(), document_json(&sample_projects()));

    let loaded = loaded_controller(&sample_projects());

    // The browser mount fetches without holding the controller, then applies
    let mut split = GalleryController::new(scaffold_page(), config).unwrap();
    let result = pollster::block_on(crate::data::load_document(&source, &split.config().data_path));
    split.finish_load(result);

    assert_eq!(split.surface().outline(), loaded.surface().outline());
    assert_eq!(card_titles(&split), card_titles(&loaded));
}
