//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, DetailTexts, GridTexts, HelpTexts, HintTexts, KeyNames, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "tilegrid",
        error: "Error",
    },
    hints: HintTexts {
        keys: KeyNames {
            arrows: "↑↓←→",
            vim: "hjkl",
            enter: "Enter",
            esc: "Esc",
            backspace: "Backspace",
            ctrl_c: "Ctrl+C",
            q: "q",
            question: "?",
        },
        move_focus: "Move",
        select: "Details",
        close: "Close",
        help: "Help",
        quit: "Quit",
    },
    grid: GridTexts {
        title: "Browse",
        loading_catalog: "Loading catalog…",
        catalog_failed: "Could not load the catalog.",
        no_rows: "The catalog has no rows.",
        row_pending: "…",
        row_loading: "Loading…",
        row_failed: "This row failed to load.",
        row_empty: "Nothing here yet.",
        no_image: "no image",
    },
    detail: DetailTexts {
        release_date: "Release Date",
        rating: "Rating",
        content_type: "Content Type",
        reference_id: "Reference ID",
        image: "Image",
        no_image: "None",
    },
    help: HelpTexts {
        title: "Keyboard",
        move_focus: "Move between tiles and rows",
        open_details: "Open tile details",
        close_details: "Close details",
        toggle_help: "Show or hide this help",
        quit: "Quit",
    },
    status: StatusTexts {
        rows_loaded: "rows",
        listing_failed: "Catalog unavailable",
        row_failed: "Failed to load",
        config_ignored: "Config ignored",
    },
};
