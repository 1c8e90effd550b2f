//! End-to-end exercise of the asset pipeline and theme manager over one
//! shared document, the way a page bootstrap wires them.

use std::sync::Arc;

use vitrine_app::{AssetOptions, AssetPipeline, ConnectionKind, SLOW_CONNECTION_CLASS};
use vitrine_dom::{AssetKind, Document, HintRel, ImageElement, Rect};
use vitrine_font::{FontConfig, FontLoaderConfig, FONTS_LOADED_CLASS, FONT_LOADING_CLASS};
use vitrine_image::LazyConfig;
use vitrine_theme::{
    ColorScheme, MemoryStore, SimulatedScheme, ThemeConfig, ThemeManager, ThemeMode,
    THEME_COLOR_META,
};

/// A homepage-shaped document: hero image above the fold, gallery below,
/// internal navigation links, a theme-color meta tag.
struct Page {
    document: Arc<Document>,
    hero: vitrine_dom::ImageId,
    gallery: Vec<vitrine_dom::ImageId>,
    nav_about: vitrine_dom::AnchorId,
    nav_github: vitrine_dom::AnchorId,
}

fn build_page() -> Page {
    let document = Arc::new(Document::new());
    document.set_viewport(Rect::new(0.0, 0.0, 1280.0, 720.0));
    document.register_meta(THEME_COLOR_META, "#ffffff");

    let hero = document.insert_image(ImageElement::eager(
        "/images/profile/portrait.webp",
        Rect::new(0.0, 0.0, 1280.0, 480.0),
    ));
    let gallery = (0..3)
        .map(|i| {
            document.insert_image(ImageElement::deferred(
                format!("/images/projects/shot-{i}.webp"),
                Rect::new(0.0, 1600.0 + 500.0 * i as f32, 600.0, 400.0),
            ))
        })
        .collect();

    let nav_about = document.insert_anchor("/about");
    let nav_github = document.insert_anchor("https://github.com/example");

    Page {
        document,
        hero,
        gallery,
        nav_about,
        nav_github,
    }
}

fn options() -> AssetOptions {
    AssetOptions {
        critical_images: vec![
            "/images/profile/portrait.webp".to_string(),
            "/images/backgrounds/hero.webp".to_string(),
        ],
        fonts: vec![FontConfig::new("Inter", [400, 600, 700])],
        font_urls: vec!["/fonts/inter-400.woff2".to_string()],
        lazy: LazyConfig::default(),
        font_loader: FontLoaderConfig::default(),
        connection: None,
    }
}

#[test]
fn init_preloads_fonts_and_critical_images() {
    let page = build_page();
    let _pipeline = AssetPipeline::init(page.document.clone(), options());

    let hints = page.document.head_links();
    let font_hints: Vec<_> = hints
        .iter()
        .filter(|h| h.as_kind == Some(AssetKind::Font))
        .collect();
    let image_hints: Vec<_> = hints
        .iter()
        .filter(|h| h.as_kind == Some(AssetKind::Image))
        .collect();

    assert_eq!(font_hints.len(), 1);
    assert!(font_hints[0].cross_origin);
    assert_eq!(image_hints.len(), 2);
    assert!(image_hints.iter().all(|h| h.rel == HintRel::Preload));

    // The declarative font list becomes one css2 stylesheet preload.
    let style_hints: Vec<_> = hints
        .iter()
        .filter(|h| h.as_kind == Some(AssetKind::Style))
        .collect();
    assert_eq!(style_hints.len(), 1);
    assert!(style_hints[0].href.contains("fonts.googleapis.com"));
    assert!(style_hints[0].href.contains("Inter"));

    assert!(page.document.has_body_class(FONT_LOADING_CLASS));
}

#[test]
fn lazy_images_load_as_the_user_scrolls() {
    let page = build_page();
    let mut pipeline = AssetPipeline::init(page.document.clone(), options());

    // Above the fold: hero untouched, gallery still parked.
    assert!(page.document.image(page.hero).unwrap().src.is_some());
    for &id in &page.gallery {
        assert!(page.document.image(id).unwrap().pending_src.is_some());
    }

    // Scroll until only the first gallery row is within the margin.
    page.document
        .set_viewport(Rect::new(0.0, 1000.0, 1280.0, 720.0));
    assert_eq!(pipeline.on_scroll(), 1);
    assert!(page.document.image(page.gallery[0]).unwrap().src.is_some());
    assert!(page.document.image(page.gallery[1]).unwrap().pending_src.is_some());

    // Scroll past everything.
    page.document
        .set_viewport(Rect::new(0.0, 2400.0, 1280.0, 720.0));
    assert_eq!(pipeline.on_scroll(), 2);
    for &id in &page.gallery {
        assert!(page.document.image(id).unwrap().src.is_some());
    }

    // Nothing left to do.
    assert_eq!(pipeline.on_scroll(), 0);
}

#[test]
fn fonts_settle_via_ready_signal() {
    let page = build_page();
    let mut pipeline = AssetPipeline::init(page.document.clone(), options());

    assert!(pipeline.tick(), "pending until the signal fires");
    pipeline.fonts_ready();
    assert!(page.document.has_body_class(FONTS_LOADED_CLASS));
    assert!(!page.document.has_body_class(FONT_LOADING_CLASS));
    assert!(!pipeline.tick());
}

#[test]
fn fonts_settle_via_timed_fallback() {
    let page = build_page();
    let mut opts = options();
    opts.font_loader = FontLoaderConfig {
        ready_signal: false,
        fallback_timeout_ms: 0,
    };
    let mut pipeline = AssetPipeline::init(page.document.clone(), opts);

    assert!(!pipeline.tick());
    assert!(page.document.has_body_class(FONTS_LOADED_CLASS));
}

#[test]
fn internal_links_prefetch_once_on_hover() {
    let page = build_page();
    let mut pipeline = AssetPipeline::init(page.document.clone(), options());
    let baseline = page.document.head_links().len();

    pipeline.on_hover(page.nav_about);
    pipeline.on_hover(page.nav_about);
    pipeline.on_touch_start(page.nav_about);
    pipeline.on_hover(page.nav_github);

    let hints = page.document.head_links();
    let prefetches: Vec<_> = hints
        .iter()
        .filter(|h| h.rel == HintRel::Prefetch)
        .collect();
    assert_eq!(hints.len(), baseline + 1);
    assert_eq!(prefetches.len(), 1);
    assert_eq!(prefetches[0].href, "/about");
}

#[test]
fn slow_connection_marks_the_document() {
    let page = build_page();
    let mut opts = options();
    opts.connection = Some(ConnectionKind::ThreeG);
    let _pipeline = AssetPipeline::init(page.document.clone(), opts);
    assert!(page.document.has_root_class(SLOW_CONNECTION_CLASS));
}

#[test]
fn content_changes_register_new_images_and_anchors() {
    let page = build_page();
    let mut pipeline = AssetPipeline::init(page.document.clone(), options());

    let late_img = page.document.insert_image(ImageElement::deferred(
        "/images/late.webp",
        Rect::new(0.0, 100.0, 600.0, 400.0),
    ));
    let late_anchor = page.document.insert_anchor("/blog");

    pipeline.on_content_changed();
    assert_eq!(pipeline.on_scroll(), 1, "late image is in the viewport");
    assert!(page.document.image(late_img).unwrap().src.is_some());

    pipeline.on_hover(late_anchor);
    assert!(page
        .document
        .head_links()
        .iter()
        .any(|h| h.rel == HintRel::Prefetch && h.href == "/blog"));
}

#[test]
fn theme_manager_composes_over_the_shared_document() {
    let page = build_page();
    let mut pipeline = AssetPipeline::init(page.document.clone(), options());

    let system = Arc::new(SimulatedScheme::new(ColorScheme::Light));
    let manager = ThemeManager::new(
        ThemeConfig::default(),
        Arc::new(MemoryStore::new()),
        system.clone(),
        page.document.clone(),
    );

    manager.set_mode(ThemeMode::Dark);
    assert!(page.document.has_root_class("dark"));
    assert_eq!(
        page.document.meta_content(THEME_COLOR_META).as_deref(),
        Some("#0f172a")
    );

    // The asset pipeline is unaffected by theme churn.
    pipeline.fonts_ready();
    assert!(page.document.has_body_class(FONTS_LOADED_CLASS));
    assert!(page.document.has_root_class("dark"));
}
