//! Closed filter model for the listing pages' search parameters.

/// Facets the backend stores inside the `metadatas` JSON column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    OtherInfo,
    StoreType,
    SalesType,
    AssetsType,
    SerialNumber,
    AgentGallery,
}

impl MetadataKind {
    /// Query key the UI uses for this facet.
    pub const fn ui_key(self) -> &'static str {
        match self {
            MetadataKind::OtherInfo => "otherInfos",
            MetadataKind::StoreType => "storeTypes",
            MetadataKind::SalesType => "salesTypes",
            MetadataKind::AssetsType => "assetsTypes",
            MetadataKind::SerialNumber => "serialNumbers",
            MetadataKind::AgentGallery => "agentGalleries",
        }
    }

    /// Renders the `metadatas` value the backend matches against.
    ///
    /// The value is substituted verbatim; the backend expects the nested
    /// values of `otherInfo` and `agentGalleries` in single quotes.
    pub fn fragment(self, value: &str) -> String {
        match self {
            MetadataKind::OtherInfo => format!(r#"{{"otherInfo":"{{'{value}':'true'}}"}}"#),
            MetadataKind::StoreType => format!(r#"{{"storeType":"{value}"}}"#),
            MetadataKind::SalesType => format!(r#"{{"salesType":"{value}"}}"#),
            MetadataKind::AssetsType => format!(r#"{{"assetsType":"{value}"}}"#),
            MetadataKind::SerialNumber => format!(r#"{{"serialNumber":"{value}"}}"#),
            MetadataKind::AgentGallery => {
                format!(r#"{{"agentGalleries":"[{{'name':'{value}'}}]"}}"#)
            }
        }
    }

    fn from_ui_key(key: &str) -> Option<Self> {
        match key {
            "otherInfos" => Some(MetadataKind::OtherInfo),
            "storeTypes" => Some(MetadataKind::StoreType),
            "salesTypes" => Some(MetadataKind::SalesType),
            "assetsTypes" => Some(MetadataKind::AssetsType),
            "serialNumbers" => Some(MetadataKind::SerialNumber),
            "agentGalleries" => Some(MetadataKind::AgentGallery),
            _ => None,
        }
    }
}

/// A single search parameter after classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchFilter {
    Nationality(String),
    Artist(String),
    Metadata(MetadataKind, String),
    PageIndex(String),
    PageSize(String),
    /// Keys the listing pages do not know about are forwarded untouched.
    Passthrough { key: String, value: String },
}

impl SearchFilter {
    /// Classifies a raw `(key, value)` pair. Never fails.
    pub fn classify(key: &str, value: &str) -> Self {
        let value = value.to_string();
        match key {
            "nationalities" => SearchFilter::Nationality(value),
            "artists" => SearchFilter::Artist(value),
            "pageIndex" => SearchFilter::PageIndex(value),
            "pageSize" => SearchFilter::PageSize(value),
            other => match MetadataKind::from_ui_key(other) {
                Some(kind) => SearchFilter::Metadata(kind, value),
                None => SearchFilter::Passthrough {
                    key: other.to_string(),
                    value,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_metadata_key() {
        for kind in [
            MetadataKind::OtherInfo,
            MetadataKind::StoreType,
            MetadataKind::SalesType,
            MetadataKind::AssetsType,
            MetadataKind::SerialNumber,
            MetadataKind::AgentGallery,
        ] {
            assert_eq!(
                SearchFilter::classify(kind.ui_key(), "x"),
                SearchFilter::Metadata(kind, "x".to_string())
            );
        }
    }

    #[test]
    fn unknown_keys_pass_through() {
        assert_eq!(
            SearchFilter::classify("countryCode", "TWN"),
            SearchFilter::Passthrough {
                key: "countryCode".to_string(),
                value: "TWN".to_string(),
            }
        );
    }

    #[test]
    fn fragments_match_backend_templates() {
        assert_eq!(
            MetadataKind::OtherInfo.fragment("framed"),
            r#"{"otherInfo":"{'framed':'true'}"}"#
        );
        assert_eq!(
            MetadataKind::SerialNumber.fragment("SN-7"),
            r#"{"serialNumber":"SN-7"}"#
        );
        assert_eq!(
            MetadataKind::AgentGallery.fragment("Tina Keng"),
            r#"{"agentGalleries":"[{'name':'Tina Keng'}]"}"#
        );
    }
}
