use crate::{collection::CollectionId, types::FieldType};
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// Typed constraint payload for one field. Constraint coherence is checked
/// by collection validation; row-level enforcement belongs to the serving
/// runtime.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[remain::sorted]
pub enum FieldKind {
    Bool,
    Date,
    Email,
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_select: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_size: Option<u64>,
        #[serde(default)]
        mime_types: Vec<String>,
        #[serde(default)]
        thumbs: Vec<String>,
        #[serde(default)]
        protected: bool,
    },
    GeoPoint,
    Json,
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Relation {
        collection_id: CollectionId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_select: Option<u32>,
    },
    Select {
        values: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_select: Option<u32>,
    },
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
}

impl FieldKind {
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Bool => FieldType::Bool,
            Self::Date => FieldType::Date,
            Self::Email => FieldType::Email,
            Self::File { .. } => FieldType::File,
            Self::GeoPoint => FieldType::GeoPoint,
            Self::Json => FieldType::Json,
            Self::Number { .. } => FieldType::Number,
            Self::Relation { .. } => FieldType::Relation,
            Self::Select { .. } => FieldType::Select,
            Self::Text { .. } => FieldType::Text,
        }
    }

    /// Target collection id, for relation fields.
    #[must_use]
    pub const fn relation_target(&self) -> Option<CollectionId> {
        match self {
            Self::Relation { collection_id, .. } => Some(*collection_id),
            _ => None,
        }
    }
}

///
/// Field
///
/// A named, typed column definition. Constructed through the per-kind
/// constructors and refined with the chainable setters; setters that do not
/// apply to the field's kind leave it untouched.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub presentable: bool,

    pub kind: FieldKind,
}

impl Field {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            required: false,
            presentable: false,
            kind,
        }
    }

    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text { max: None })
    }

    #[must_use]
    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Email)
    }

    #[must_use]
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number {
            min: None,
            max: None,
        })
    }

    #[must_use]
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    #[must_use]
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    #[must_use]
    pub fn select<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, FieldKind::Select {
            values: values.into_iter().map(Into::into).collect(),
            max_select: None,
        })
    }

    #[must_use]
    pub fn relation(name: impl Into<String>, target: CollectionId) -> Self {
        Self::new(name, FieldKind::Relation {
            collection_id: target,
            max_select: None,
        })
    }

    #[must_use]
    pub fn geo_point(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::GeoPoint)
    }

    #[must_use]
    pub fn json(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Json)
    }

    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::File {
            max_select: None,
            max_size: None,
            mime_types: Vec::new(),
            thumbs: Vec::new(),
            protected: false,
        })
    }

    /// Reject rows that leave this field unset.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Surface this field when rows are rendered as references.
    #[must_use]
    pub fn presentable(mut self) -> Self {
        self.presentable = true;
        self
    }

    /// Cap the stored length of a text field.
    #[must_use]
    pub fn max_len(mut self, value: u32) -> Self {
        if let FieldKind::Text { max } = &mut self.kind {
            *max = Some(value);
        }
        self
    }

    /// Lower bound for a number field.
    #[must_use]
    pub fn min(mut self, value: f64) -> Self {
        if let FieldKind::Number { min, .. } = &mut self.kind {
            *min = Some(value);
        }
        self
    }

    /// Upper bound for a number field.
    #[must_use]
    pub fn max(mut self, value: f64) -> Self {
        if let FieldKind::Number { max, .. } = &mut self.kind {
            *max = Some(value);
        }
        self
    }

    /// Allow up to `value` choices on a select, relation or file field.
    #[must_use]
    pub fn max_select(mut self, value: u32) -> Self {
        match &mut self.kind {
            FieldKind::File { max_select, .. }
            | FieldKind::Relation { max_select, .. }
            | FieldKind::Select { max_select, .. } => *max_select = Some(value),
            _ => {}
        }
        self
    }

    /// Cap the byte size of each attachment on a file field.
    #[must_use]
    pub fn max_size(mut self, value: u64) -> Self {
        if let FieldKind::File { max_size, .. } = &mut self.kind {
            *max_size = Some(value);
        }
        self
    }

    /// Restrict a file field to the given MIME types.
    #[must_use]
    pub fn mime_types<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let FieldKind::File { mime_types, .. } = &mut self.kind {
            *mime_types = values.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Thumbnail sizes (`WxH`) generated for a file field.
    #[must_use]
    pub fn thumbs<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let FieldKind::File { thumbs, .. } = &mut self.kind {
            *thumbs = values.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Serve a file field's attachments only to authorized requests.
    #[must_use]
    pub fn protected(mut self) -> Self {
        if let FieldKind::File { protected, .. } = &mut self.kind {
            *protected = true;
        }
        self
    }

    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_start_optional_and_unconstrained() {
        let field = Field::text("notes");
        assert!(!field.required);
        assert!(!field.presentable);
        assert!(matches!(field.kind, FieldKind::Text { max: None }));
    }

    #[test]
    fn setters_apply_to_their_own_kind_only() {
        let field = Field::bool("is_active").required().max_len(10);
        assert!(field.required);
        assert!(
            matches!(field.kind, FieldKind::Bool),
            "text constraint must not rewrite a bool kind"
        );

        let field = Field::text("reason").max_len(300);
        assert!(matches!(field.kind, FieldKind::Text { max: Some(300) }));
    }

    #[test]
    fn file_setters_compose() {
        let field = Field::file("images")
            .max_select(10)
            .max_size(10 * 1024 * 1024)
            .mime_types(["image/png", "image/jpeg"])
            .thumbs(["100x100"]);

        let FieldKind::File {
            max_select,
            max_size,
            mime_types,
            thumbs,
            protected,
        } = &field.kind
        else {
            panic!("expected a file kind");
        };
        assert_eq!(*max_select, Some(10));
        assert_eq!(*max_size, Some(10 * 1024 * 1024));
        assert_eq!(mime_types.len(), 2);
        assert_eq!(thumbs, &["100x100".to_string()]);
        assert!(!protected);
    }
}
