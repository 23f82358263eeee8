use og_preview::errors::AppError;
use og_preview::layouts::{LayoutRegistry, RenderEnv, parse_assignments};
use og_preview::logo_assets::{LogoAssetStorage, LogoId, LogoResolver, RenderContext};
use og_preview::models::{AuthorDirectory, Element};
use strum::IntoEnumIterator;
use tempfile::TempDir;

fn asset_dir_with_all_logos() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for id in LogoId::iter() {
        std::fs::write(
            temp_dir.path().join(id.file_name()),
            format!("<svg id=\"{}\"></svg>", id),
        )
        .unwrap();
    }
    temp_dir
}

#[test]
fn every_layout_renders_from_its_defaults() {
    let temp_dir = asset_dir_with_all_logos();
    let resolver = LogoResolver::new(LogoAssetStorage::new(temp_dir.path(), "/assets"));
    let authors = AuthorDirectory::default();
    let registry = LayoutRegistry::builtin();

    for context in [RenderContext::Client, RenderContext::Server] {
        let env = RenderEnv::new(&resolver, &authors, context);
        for layout in registry.iter() {
            let card = layout
                .render(&layout.default_fields(), &env)
                .unwrap_or_else(|e| panic!("{} failed: {e}", layout.name()));

            assert_eq!(card.layout, layout.name());
            assert_eq!((card.width, card.height), (1200, 630));
            let src = card.logo_src().expect("card without logo");
            match context {
                RenderContext::Server => assert!(src.starts_with("data:image/svg+xml;base64,")),
                RenderContext::Client => assert!(src.starts_with("/assets/")),
            }
        }
    }
}

#[test]
fn server_cards_share_cached_logos() {
    let temp_dir = asset_dir_with_all_logos();
    let resolver = LogoResolver::new(LogoAssetStorage::new(temp_dir.path(), "/assets"));
    let authors = AuthorDirectory::default();
    let registry = LayoutRegistry::builtin();
    let env = RenderEnv::new(&resolver, &authors, RenderContext::Server);

    let fields = parse_assignments(["Page=Deploying", "Logo=broxi-dark"]).unwrap();
    let dreamy = registry
        .get("docs-simple-dreamy")
        .unwrap()
        .render(&fields, &env)
        .unwrap();

    std::fs::remove_file(temp_dir.path().join("broxi-dark.svg")).unwrap();
    let ocean = registry
        .get("docs-simple-dark-ocean")
        .unwrap()
        .render(&fields, &env)
        .unwrap();

    assert_eq!(dreamy.logo_src(), ocean.logo_src());
    assert!(resolver.cache().contains(LogoId::BroxiDark));
}

#[test]
fn server_card_without_assets_still_renders() {
    let temp_dir = TempDir::new().unwrap();
    let resolver = LogoResolver::new(LogoAssetStorage::new(temp_dir.path(), "/assets"));
    let authors = AuthorDirectory::default();
    let env = RenderEnv::new(&resolver, &authors, RenderContext::Server);

    let fields =
        parse_assignments(["Title=Shipping", "Author=Sarah Bedell", "Theme=DARK"]).unwrap();
    let card = LayoutRegistry::builtin()
        .get("blog")
        .unwrap()
        .render(&fields, &env)
        .unwrap();

    assert_eq!(card.logo_src(), Some("/assets/guidenai-dark.svg"));
    match card.element("avatar") {
        Some(Element::Image { src, .. }) => {
            assert_eq!(src, "https://og.railway.app/authors/sarah-bedell.jpg")
        }
        other => panic!("unexpected avatar {other:?}"),
    }
}

#[test]
fn invalid_fields_are_reported() {
    let resolver = LogoResolver::new(LogoAssetStorage::default());
    let authors = AuthorDirectory::default();
    let env = RenderEnv::new(&resolver, &authors, RenderContext::Client);
    let registry = LayoutRegistry::builtin();

    let fields = parse_assignments(["Title=T", "Author=A", "Logo=acme-dark"]).unwrap();
    let err = registry.get("blog").unwrap().render(&fields, &env).unwrap_err();
    assert!(matches!(err, AppError::InvalidField { ref field, .. } if field == "Logo"));

    let fields = parse_assignments(["Icon=Maybe"]).unwrap();
    let err = registry.get("starter").unwrap().render(&fields, &env).unwrap_err();
    assert!(matches!(err, AppError::InvalidField { ref field, .. } if field == "Icon"));
}

#[test]
fn card_serializes_with_tagged_elements() {
    let resolver = LogoResolver::new(LogoAssetStorage::default());
    let authors = AuthorDirectory::default();
    let env = RenderEnv::new(&resolver, &authors, RenderContext::Client);

    let fields = parse_assignments(["Name=Remix", "URL=github.com/remix"]).unwrap();
    let card = LayoutRegistry::builtin()
        .get("starter")
        .unwrap()
        .render(&fields, &env)
        .unwrap();
    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["layout"], "starter");
    let logo = json["elements"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["type"] == "logo")
        .unwrap();
    assert_eq!(logo["src"], "/assets/guidenai-light.svg");
    assert_eq!(logo["width"], 60);
    assert_eq!(logo["top"], 66);
}
