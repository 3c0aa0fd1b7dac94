//! View model types representing renderable UI state.
//!
//! A [`UIViewModel`] is computed from an [`AppState`] snapshot and a pane size.
//! It holds the frame's [`Layout`] together with display-ready text, so the
//! component renderers contain no decisions beyond styling.

use crate::app::{AppState, LoadState, TAXONOMY_URL};
use crate::domain::{CatalogEntry, FilterLabel, Tier};
use crate::ui::helpers::format_review_date;
use crate::ui::layout::Layout;

const TITLE: &str = "SBC Tier List";
const PLACEHOLDER: &str = "-";

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub layout: Layout,
    pub header: HeaderInfo,
    pub active_filter: FilterLabel,
    /// Loading or failure notice above the footer.
    pub status: Option<StatusLine>,
    /// Present while an entry is selected.
    pub detail: Option<DetailPanel>,
    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Taxonomy reference line under the title.
    pub subtitle: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

/// Contents of the detail panel for the selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub title: String,
    pub tier: Option<Tier>,
    pub fields: Vec<DetailField>,
    pub hints: String,
}

/// One labelled line in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    /// Drawn in the link color when set.
    pub is_link: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

impl UIViewModel {
    /// Computes the view model for a `rows` × `cols` pane.
    #[must_use]
    pub fn compute(state: &AppState, rows: usize, cols: usize) -> Self {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let layout = Layout::compute(&state.board, state.cursor, state.is_detail_open(), rows, cols);

        Self {
            layout,
            header: Self::compute_header(),
            active_filter: state.filter,
            status: Self::compute_status(state),
            detail: state.selection.as_ref().map(Self::compute_detail),
            footer: Self::compute_footer(state),
        }
    }

    fn compute_header() -> HeaderInfo {
        let reference = TAXONOMY_URL.trim_start_matches("https://");
        HeaderInfo {
            title: TITLE.to_string(),
            subtitle: format!("Filter definitions available at {reference}"),
        }
    }

    fn compute_status(state: &AppState) -> Option<StatusLine> {
        let info = |text: String| {
            Some(StatusLine {
                text,
                kind: StatusKind::Info,
            })
        };

        match &state.load {
            LoadState::Idle => info("Waiting for permissions...".to_string()),
            LoadState::InFlight => info(format!("Loading catalog from {}...", state.catalog)),
            LoadState::Failed { error } => Some(StatusLine {
                text: format!("Could not load catalog: {error}"),
                kind: StatusKind::Error,
            }),
            LoadState::Loaded { .. } if state.board.is_empty() => {
                info(format!("No boards in {}", state.filter))
            }
            LoadState::Loaded { .. } => None,
        }
    }

    fn compute_detail(entry: &CatalogEntry) -> DetailPanel {
        let or_placeholder = |value: &str| {
            if value.trim().is_empty() {
                PLACEHOLDER.to_string()
            } else {
                value.to_string()
            }
        };
        let link = |label, value: &str| DetailField {
            label,
            value: or_placeholder(value),
            is_link: !value.trim().is_empty(),
        };
        let text = |label, value: String| DetailField {
            label,
            value,
            is_link: false,
        };

        let review_date = if entry.review_date.trim().is_empty() {
            PLACEHOLDER.to_string()
        } else {
            format_review_date(&entry.review_date)
        };

        DetailPanel {
            title: entry.name.clone(),
            tier: entry.tier(),
            fields: vec![
                text("Type", or_placeholder(&entry.category)),
                text("Review Date", review_date),
                link("Video Review", &entry.video_url),
                link("Purchase", &entry.purchase_link),
                text("Image", or_placeholder(&entry.image_path)),
            ],
            hints: "v: watch review  b: buy  t: taxonomy  Esc: close".to_string(),
        }
    }

    fn compute_footer(state: &AppState) -> FooterInfo {
        let keybindings = if state.is_detail_open() {
            "v: video  b: buy  t: taxonomy  Esc: close"
        } else {
            "h/j/k/l: move  Tab: filter  1-5: pick filter  Enter: details  t: taxonomy  q: quit"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogLocation;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(CatalogLocation::default(), FilterLabel::All, Theme::default())
    }

    #[test]
    fn header_names_taxonomy_reference() {
        let vm = UIViewModel::compute(&state(), 30, 100);
        assert_eq!(vm.header.title, "SBC Tier List");
        assert!(vm.header.subtitle.contains("github.com/platima/board-taxomomies"));
    }

    #[test]
    fn status_follows_load_state() {
        let loading = state().with_load(LoadState::InFlight);
        let vm = UIViewModel::compute(&loading, 30, 100);
        assert!(vm.status.unwrap().text.starts_with("Loading catalog"));

        let failed = state().with_load(LoadState::Failed {
            error: "boom".to_string(),
        });
        let status = UIViewModel::compute(&failed, 30, 100).status.unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("boom"));

        let loaded = state()
            .with_entries(vec![CatalogEntry::new("Pi 5", "sbc", "S", 1.0)])
            .with_load(LoadState::Loaded { count: 1 });
        assert!(UIViewModel::compute(&loaded, 30, 100).status.is_none());
    }

    #[test]
    fn failed_load_still_lays_out_five_rows() {
        let failed = state().with_load(LoadState::Failed {
            error: "boom".to_string(),
        });
        let vm = UIViewModel::compute(&failed, 30, 100);
        assert_eq!(vm.layout.tiers.len(), 5);
        assert!(vm.layout.tiers.iter().all(|row| row.cards.is_empty()));
    }

    #[test]
    fn detail_formats_fields() {
        let mut entry = CatalogEntry::new("Pi 5", "sbc", "S", 1.0);
        entry.review_date = "2024-01-05".to_string();
        entry.video_url = "https://youtu.be/pi5".to_string();

        let state = state()
            .with_entries(vec![entry.clone()])
            .with_selection(Some(entry));
        let detail = UIViewModel::compute(&state, 30, 100).detail.unwrap();

        assert_eq!(detail.title, "Pi 5");
        assert_eq!(detail.tier, Some(Tier::S));
        let values: Vec<(&str, &str, bool)> = detail
            .fields
            .iter()
            .map(|f| (f.label, f.value.as_str(), f.is_link))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Type", "sbc", false),
                ("Review Date", "January 5, 2024", false),
                ("Video Review", "https://youtu.be/pi5", true),
                ("Purchase", "-", false),
                ("Image", "-", false),
            ]
        );
    }
}
