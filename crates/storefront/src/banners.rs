//! Transient, stacking, dismissible notification banners.
//!
//! Banners never auto-expire; they go away through the close control or
//! when one of their actions runs. Actions carry a typed [`ActionCommand`]
//! instead of a callback: the engine resolves the command when the action
//! is invoked and dismisses the owning banner afterwards, which is how an
//! action "receives the banner's own handle".

use farmstand_core::ProductEntry;

/// Handle identifying a banner within the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(u64);

/// Banner severity, mapped to an alert color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerCategory {
    Success,
    Warning,
    Danger,
    Primary,
    Secondary,
    Info,
}

impl BannerCategory {
    /// The alert color class for this category.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Warning => "alert-warning",
            Self::Danger => "alert-danger",
            Self::Primary => "alert-primary",
            Self::Secondary => "alert-secondary",
            Self::Info => "alert-info",
        }
    }
}

/// What an invoked banner action does.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionCommand {
    /// Re-insert a removed liked entry. The payload is the exact entry
    /// captured at removal time, never re-read from the page.
    RestoreLike(ProductEntry),
}

/// A labeled action rendered inside a banner.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerAction {
    /// Button label.
    pub label: String,
    /// Button class.
    pub css_class: String,
    /// Command executed when the action is invoked.
    pub command: ActionCommand,
}

/// One notification banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    /// Stack handle.
    pub id: BannerId,
    /// Severity category.
    pub category: BannerCategory,
    /// Rich-text message (interpolated values are pre-escaped).
    pub message: String,
    /// Whether a close control is rendered.
    pub dismissible: bool,
    /// Labeled actions, if any.
    pub actions: Vec<BannerAction>,
}

/// The banner stack, newest first.
#[derive(Debug, Clone, Default)]
pub struct BannerStack {
    banners: Vec<Banner>,
    next_id: u64,
}

impl BannerStack {
    /// Empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            banners: Vec::new(),
            next_id: 0,
        }
    }

    /// Prepend a dismissible banner with no actions.
    pub fn push(&mut self, category: BannerCategory, message: impl Into<String>) -> BannerId {
        self.push_banner(category, message, true, Vec::new())
    }

    /// Prepend a banner with actions.
    pub fn push_with_actions(
        &mut self,
        category: BannerCategory,
        message: impl Into<String>,
        actions: Vec<BannerAction>,
    ) -> BannerId {
        self.push_banner(category, message, true, actions)
    }

    /// Prepend a banner, returning its handle.
    pub fn push_banner(
        &mut self,
        category: BannerCategory,
        message: impl Into<String>,
        dismissible: bool,
        actions: Vec<BannerAction>,
    ) -> BannerId {
        let id = BannerId(self.next_id);
        self.next_id += 1;
        self.banners.insert(
            0,
            Banner {
                id,
                category,
                message: message.into(),
                dismissible,
                actions,
            },
        );
        id
    }

    /// Remove a banner. Unknown handles are ignored.
    pub fn dismiss(&mut self, id: BannerId) {
        self.banners.retain(|banner| banner.id != id);
    }

    /// Look up a banner by handle.
    #[must_use]
    pub fn get(&self, id: BannerId) -> Option<&Banner> {
        self.banners.iter().find(|banner| banner.id == id)
    }

    /// The stack, newest first.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Banner> {
        self.banners.iter()
    }

    /// Number of banners currently shown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.banners.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}

impl<'a> IntoIterator for &'a BannerStack {
    type Item = &'a Banner;
    type IntoIter = std::slice::Iter<'a, Banner>;

    fn into_iter(self) -> Self::IntoIter {
        self.banners.iter()
    }
}

/// Escape a value interpolated into a rich-text banner message.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
