//! Resource hints appended to the document head
//!
//! A [`LinkHint`] models a `<link>` element used for resource loading
//! optimization: `rel=preload` for assets needed by the current page and
//! `rel=prefetch` for likely navigations.

/// Relationship of a resource hint to the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintRel {
    /// Fetch now, the current page needs it
    Preload,
    /// Fetch opportunistically for a likely next navigation
    Prefetch,
}

impl HintRel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HintRel::Preload => "preload",
            HintRel::Prefetch => "prefetch",
        }
    }
}

/// Asset class a preload hint targets (`as` attribute)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Font,
    Style,
    Script,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Font => "font",
            AssetKind::Style => "style",
            AssetKind::Script => "script",
        }
    }
}

/// A head-level resource hint
#[derive(Debug, Clone, PartialEq)]
pub struct LinkHint {
    pub rel: HintRel,
    pub href: String,
    pub as_kind: Option<AssetKind>,
    pub mime_type: Option<String>,
    pub cross_origin: bool,
}

impl LinkHint {
    /// Create a preload hint
    pub fn preload(href: impl Into<String>) -> Self {
        Self {
            rel: HintRel::Preload,
            href: href.into(),
            as_kind: None,
            mime_type: None,
            cross_origin: false,
        }
    }

    /// Create a prefetch hint
    pub fn prefetch(href: impl Into<String>) -> Self {
        Self {
            rel: HintRel::Prefetch,
            href: href.into(),
            as_kind: None,
            mime_type: None,
            cross_origin: false,
        }
    }

    /// Set the targeted asset class
    pub fn with_kind(mut self, kind: AssetKind) -> Self {
        self.as_kind = Some(kind);
        self
    }

    /// Set the expected MIME type
    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    /// Request an anonymous cross-origin fetch
    pub fn with_cross_origin(mut self) -> Self {
        self.cross_origin = true;
        self
    }
}
