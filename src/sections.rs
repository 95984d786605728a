use serde::Serialize;

/// Page sections in document order. The header highlights whichever one
/// the middle of the viewport has most recently passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Work,
    Experience,
    Services,
    Stack,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Self::Home,
        Self::About,
        Self::Work,
        Self::Experience,
        Self::Services,
        Self::Stack,
        Self::Contact,
    ];

    /// Element id of the section on the page.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Work => "work",
            Self::Experience => "experience",
            Self::Services => "services",
            Self::Stack => "stack",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::About => "ABOUT",
            Self::Work => "WORK",
            Self::Experience => "EXPERIENCE",
            Self::Services => "SERVICES",
            Self::Stack => "STACK",
            Self::Contact => "CONTACT",
        }
    }
}

fn probe_position(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height / 2.0
}

/// Picks the last section (in document order) whose top offset sits at or
/// above the middle of the viewport. Sections without an offset are not on
/// the page and are skipped. `None` means nothing qualified and the caller
/// keeps its current section.
pub fn resolve_active_section<F>(
    scroll_y: f64,
    viewport_height: f64,
    mut offset_of: F,
) -> Option<Section>
where
    F: FnMut(Section) -> Option<f64>,
{
    let position = probe_position(scroll_y, viewport_height);

    Section::ALL
        .into_iter()
        .filter(|section| offset_of(*section).is_some_and(|top| top <= position))
        .last()
}

pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}
