//! Connection speed hinting
//!
//! Pages can downgrade their asset appetite on slow links. The host reads
//! the platform's effective connection type (when exposed) and maps it to
//! a [`ConnectionKind`]; slow links mark the root element so stylesheets
//! can serve lighter variants.

use tracing::debug;

use vitrine_dom::Document;

/// Root class present on slow connections
pub const SLOW_CONNECTION_CLASS: &str = "slow-connection";

/// Effective connection type as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionKind {
    Slow2g,
    TwoG,
    ThreeG,
    FourG,
    #[default]
    Unknown,
}

impl ConnectionKind {
    /// Parse a platform effective-type string; unknown strings degrade
    pub fn from_effective_type(value: &str) -> Self {
        match value {
            "slow-2g" => ConnectionKind::Slow2g,
            "2g" => ConnectionKind::TwoG,
            "3g" => ConnectionKind::ThreeG,
            "4g" => ConnectionKind::FourG,
            _ => ConnectionKind::Unknown,
        }
    }

    /// Whether assets should be downgraded for this link
    pub fn is_slow(&self) -> bool {
        matches!(
            self,
            ConnectionKind::Slow2g | ConnectionKind::TwoG | ConnectionKind::ThreeG
        )
    }
}

/// Mark the document when the connection warrants lighter assets
pub fn apply_connection_class(document: &Document, kind: ConnectionKind) {
    if kind.is_slow() {
        debug!("slow connection ({kind:?}); marking document");
        document.add_root_class(SLOW_CONNECTION_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_types_mark_the_root() {
        for kind in [
            ConnectionKind::Slow2g,
            ConnectionKind::TwoG,
            ConnectionKind::ThreeG,
        ] {
            let doc = Document::new();
            apply_connection_class(&doc, kind);
            assert!(doc.has_root_class(SLOW_CONNECTION_CLASS), "{kind:?}");
        }
    }

    #[test]
    fn fast_and_unknown_leave_the_root_alone() {
        for kind in [ConnectionKind::FourG, ConnectionKind::Unknown] {
            let doc = Document::new();
            apply_connection_class(&doc, kind);
            assert!(!doc.has_root_class(SLOW_CONNECTION_CLASS), "{kind:?}");
        }
    }

    #[test]
    fn effective_type_parsing() {
        assert_eq!(
            ConnectionKind::from_effective_type("slow-2g"),
            ConnectionKind::Slow2g
        );
        assert_eq!(ConnectionKind::from_effective_type("4g"), ConnectionKind::FourG);
        assert_eq!(
            ConnectionKind::from_effective_type("5g"),
            ConnectionKind::Unknown
        );
    }
}
