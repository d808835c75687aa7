//! Declarative allow-lists: one [`Schema`] per entity kind, consumed by the
//! single parser and renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Quoted free text.
    Text,
    /// Bare `YYYY-MM-DD`.
    Date,
    /// Bare unsigned integer.
    Integer,
    /// Bracketed, comma separated, quoted items on one line.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Required fields must be present in published files.
    pub required: bool,
    /// Absent optional fields are left out of rendered files instead of
    /// being written with an empty value.
    pub omit_when_absent: bool,
}

impl Field {
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            omit_when_absent: false,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            omit_when_absent: false,
        }
    }

    #[must_use]
    pub const fn sparse(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            omit_when_absent: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Entity kind, used in error messages.
    pub entity: &'static str,
    /// Fields in rendering order.
    pub fields: &'static [Field],
}

impl Schema {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn required(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.required)
    }
}

pub const TITLE: &str = "title";
pub const CATCHLINE: &str = "catchline";
pub const DESCRIPTION: &str = "description";
pub const UPDATED_AT: &str = "updatedAt";
pub const PUBLISHED_AT: &str = "publishedAt";
pub const SERIE: &str = "serie";
pub const SERIE_ORDER: &str = "serieOrder";
pub const CATEGORY: &str = "category";
pub const TAGS: &str = "tags";
pub const ICON: &str = "icon";
pub const COLOR: &str = "color";
pub const NAME: &str = "name";
pub const CREATOR: &str = "creator";
pub const PUBLISHER: &str = "publisher";
pub const TWITTER_PROFILE: &str = "twitterProfile";
pub const LOCALE: &str = "locale";

/// Singleton pages (home) and collection list pages.
pub const PAGE: Schema = Schema {
    entity: "page",
    fields: &[
        Field::required(TITLE, FieldKind::Text),
        Field::required(CATCHLINE, FieldKind::Text),
        Field::required(DESCRIPTION, FieldKind::Text),
        Field::optional(UPDATED_AT, FieldKind::Date),
    ],
};

pub const ARTICLE: Schema = Schema {
    entity: "article",
    fields: &[
        Field::required(TITLE, FieldKind::Text),
        Field::required(CATCHLINE, FieldKind::Text),
        Field::required(DESCRIPTION, FieldKind::Text),
        Field::required(PUBLISHED_AT, FieldKind::Date),
        Field::optional(UPDATED_AT, FieldKind::Date),
        Field::sparse(SERIE, FieldKind::Text),
        Field::sparse(SERIE_ORDER, FieldKind::Integer),
        Field::required(CATEGORY, FieldKind::Text),
        Field::required(TAGS, FieldKind::List),
    ],
};

/// Categories, tags and series.
pub const TERM: Schema = Schema {
    entity: "term",
    fields: &[
        Field::required(TITLE, FieldKind::Text),
        Field::required(CATCHLINE, FieldKind::Text),
        Field::required(DESCRIPTION, FieldKind::Text),
        Field::optional(ICON, FieldKind::Text),
        Field::optional(COLOR, FieldKind::Text),
    ],
};

pub const WEBSITE: Schema = Schema {
    entity: "website",
    fields: &[
        Field::required(NAME, FieldKind::Text),
        Field::required(CREATOR, FieldKind::Text),
        Field::required(PUBLISHER, FieldKind::Text),
        Field::required(TWITTER_PROFILE, FieldKind::Text),
        Field::optional(LOCALE, FieldKind::Text),
    ],
};
