//! Interaction mode and input focus types.
//!
//! The plugin operates in one of two modes:
//! - **Search**: structured search narrowed by the filter fields
//! - **Chat**: free-text question answered by the generative backend
//!
//! The mode gates which [`InputField`]s take part in the input surface. Filter
//! fields are focusable and rendered only in Search mode; in Chat mode they keep
//! their values but are skipped by focus cycling.
//!
//! # Example
//!
//! ```rust
//! use savory::app::modes::{InputField, Mode};
//!
//! let mode = Mode::Search.toggle();
//! assert_eq!(mode, Mode::Chat);
//! assert_eq!(InputField::Query.next(mode), InputField::Query);
//! ```

/// Request path selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Structured search with optional filters.
    #[default]
    Search,

    /// Natural-language question answered with generated text.
    Chat,
}

impl Mode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Search => Self::Chat,
            Self::Chat => Self::Search,
        }
    }

    /// Tab label shown above the query box.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "Smart Search",
            Self::Chat => "AI Chat",
        }
    }

    /// Placeholder shown in an empty query box.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Search => "Search dishes, ingredients, cuisines…",
            Self::Chat => "Ask anything about food…",
        }
    }

    /// Returns `true` if the filter fields are part of the input surface.
    #[must_use]
    pub const fn shows_filters(self) -> bool {
        matches!(self, Self::Search)
    }
}

/// Input field holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    /// Main query box, available in both modes.
    #[default]
    Query,

    /// Cuisine filter text.
    Cuisine,

    /// Calorie ceiling text.
    MaxCalories,

    /// Result count selector, stepped with left/right.
    ResultCount,
}

const SEARCH_FIELDS: [InputField; 4] = [
    InputField::Query,
    InputField::Cuisine,
    InputField::MaxCalories,
    InputField::ResultCount,
];

const CHAT_FIELDS: [InputField; 1] = [InputField::Query];

impl InputField {
    /// Fields that can take focus in `mode`, in tab order.
    #[must_use]
    pub const fn available(mode: Mode) -> &'static [Self] {
        match mode {
            Mode::Search => &SEARCH_FIELDS,
            Mode::Chat => &CHAT_FIELDS,
        }
    }

    /// Returns `true` if the field can take focus in `mode`.
    #[must_use]
    pub fn is_available(self, mode: Mode) -> bool {
        Self::available(mode).contains(&self)
    }

    /// Next field in tab order, wrapping.
    #[must_use]
    pub fn next(self, mode: Mode) -> Self {
        let fields = Self::available(mode);
        fields
            .iter()
            .position(|f| *f == self)
            .map_or(Self::Query, |i| fields[(i + 1) % fields.len()])
    }

    /// Previous field in tab order, wrapping.
    #[must_use]
    pub fn prev(self, mode: Mode) -> Self {
        let fields = Self::available(mode);
        fields
            .iter()
            .position(|f| *f == self)
            .map_or(Self::Query, |i| fields[(i + fields.len() - 1) % fields.len()])
    }

    /// Returns `true` for fields edited by typing.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::ResultCount)
    }
}
