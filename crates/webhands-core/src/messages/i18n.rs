//! Default English message catalog.

use webhands_protocols::MessageFormatter;

/// Message keys used by the action handlers.
pub mod keys {
    pub const SEARCH_GOOGLE_START: &str = "action.search_google.start";
    pub const SEARCH_GOOGLE_OK: &str = "action.search_google.ok";
    pub const GO_TO_URL_START: &str = "action.go_to_url.start";
    pub const GO_TO_URL_OK: &str = "action.go_to_url.ok";
    pub const GO_BACK_START: &str = "action.go_back.start";
    pub const GO_BACK_OK: &str = "action.go_back.ok";
    pub const WAIT_START: &str = "action.wait.start";
    pub const WAIT_OK: &str = "action.wait.ok";

    pub const CLICK_START: &str = "action.click.start";
    pub const CLICK_OK: &str = "action.click.ok";
    pub const CLICK_FILE_UPLOADER: &str = "action.click.file_uploader";
    pub const CLICK_NEW_TAB_OPENED: &str = "action.click.new_tab_opened";
    pub const INPUT_TEXT_START: &str = "action.input_text.start";
    pub const INPUT_TEXT_OK: &str = "action.input_text.ok";
    pub const SEND_KEYS_START: &str = "action.send_keys.start";
    pub const SEND_KEYS_OK: &str = "action.send_keys.ok";

    pub const SWITCH_TAB_START: &str = "action.switch_tab.start";
    pub const SWITCH_TAB_OK: &str = "action.switch_tab.ok";
    pub const OPEN_TAB_START: &str = "action.open_tab.start";
    pub const OPEN_TAB_OK: &str = "action.open_tab.ok";
    pub const CLOSE_TAB_START: &str = "action.close_tab.start";
    pub const CLOSE_TAB_OK: &str = "action.close_tab.ok";

    pub const CACHE_START: &str = "action.cache.start";
    pub const CACHE_OK: &str = "action.cache.ok";

    pub const SCROLL_TO_PERCENT_START: &str = "action.scroll_to_percent.start";
    pub const SCROLL_TO_PERCENT_OK: &str = "action.scroll_to_percent.ok";
    pub const SCROLL_TO_TOP_START: &str = "action.scroll_to_top.start";
    pub const SCROLL_TO_TOP_OK: &str = "action.scroll_to_top.ok";
    pub const SCROLL_TO_BOTTOM_START: &str = "action.scroll_to_bottom.start";
    pub const SCROLL_TO_BOTTOM_OK: &str = "action.scroll_to_bottom.ok";
    pub const PREVIOUS_PAGE_START: &str = "action.previous_page.start";
    pub const PREVIOUS_PAGE_OK: &str = "action.previous_page.ok";
    pub const NEXT_PAGE_START: &str = "action.next_page.start";
    pub const NEXT_PAGE_OK: &str = "action.next_page.ok";
    pub const SCROLL_TO_TEXT_START: &str = "action.scroll_to_text.start";
    pub const SCROLL_TO_TEXT_OK: &str = "action.scroll_to_text.ok";
    pub const SCROLL_TO_TEXT_NOT_FOUND: &str = "action.scroll_to_text.not_found";
    pub const SCROLL_TO_TEXT_FAILED: &str = "action.scroll_to_text.failed";

    pub const GET_DROPDOWN_OPTIONS_START: &str = "action.get_dropdown_options.start";
    pub const GET_DROPDOWN_OPTIONS_OK: &str = "action.get_dropdown_options.ok";
    pub const GET_DROPDOWN_OPTIONS_NO_OPTIONS: &str = "action.get_dropdown_options.no_options";
    pub const GET_DROPDOWN_OPTIONS_USE_EXACT_TEXT: &str =
        "action.get_dropdown_options.use_exact_text";
    pub const GET_DROPDOWN_OPTIONS_FAILED: &str = "action.get_dropdown_options.failed";
    pub const SELECT_DROPDOWN_OPTION_START: &str = "action.select_dropdown_option.start";
    pub const SELECT_DROPDOWN_OPTION_OK: &str = "action.select_dropdown_option.ok";
    pub const SELECT_DROPDOWN_OPTION_NOT_SELECT: &str = "action.select_dropdown_option.not_select";
    pub const SELECT_DROPDOWN_OPTION_FAILED: &str = "action.select_dropdown_option.failed";

    pub const ERROR_ELEMENT_NOT_EXIST: &str = "action.error.element_not_exist";
    pub const ERROR_ELEMENT_NO_LONGER_AVAILABLE: &str = "action.error.element_no_longer_available";
    pub const ERROR_ALREADY_AT_TOP: &str = "action.error.already_at_top";
    pub const ERROR_ALREADY_AT_BOTTOM: &str = "action.error.already_at_bottom";
    pub const ERROR_PAGE_ALREADY_AT_TOP: &str = "action.error.page_already_at_top";
    pub const ERROR_PAGE_ALREADY_AT_BOTTOM: &str = "action.error.page_already_at_bottom";
    pub const ERROR_SCROLL_LIMIT_REACHED: &str = "action.error.scroll_limit_reached";
}

fn template(key: &str) -> Option<&'static str> {
    use keys::*;

    let text = match key {
        SEARCH_GOOGLE_START => "Searching for \"$1\" in Google",
        SEARCH_GOOGLE_OK => "Searched for \"$1\" in Google",
        GO_TO_URL_START => "Navigating to $1",
        GO_TO_URL_OK => "Navigated to $1",
        GO_BACK_START => "Navigating back",
        GO_BACK_OK => "Navigated back",
        WAIT_START => "Waiting for $1 seconds",
        WAIT_OK => "$1 seconds elapsed",

        CLICK_START => "Click element with index $1",
        CLICK_OK => "Clicked element with index $1: $2",
        CLICK_FILE_UPLOADER => {
            "Index $1 - has an element which opens file upload dialog. \
             Use a dedicated file upload function instead of clicking it"
        }
        CLICK_NEW_TAB_OPENED => "New tab opened - switching to it",
        INPUT_TEXT_START => "Input text into index $1",
        INPUT_TEXT_OK => "Input $1 into index $2",
        SEND_KEYS_START => "Sending keys: $1",
        SEND_KEYS_OK => "Sent keys: $1",

        SWITCH_TAB_START => "Switching to tab $1",
        SWITCH_TAB_OK => "Switched to tab $1",
        OPEN_TAB_START => "Opening $1 in new tab",
        OPEN_TAB_OK => "Opened $1 in new tab",
        CLOSE_TAB_START => "Closing tab $1",
        CLOSE_TAB_OK => "Closed tab $1",

        CACHE_START => "Caching findings: $1",
        CACHE_OK => "Cached findings: $1",

        SCROLL_TO_PERCENT_START => "Scrolling to percent",
        SCROLL_TO_PERCENT_OK => "Scrolled to percent: $1",
        SCROLL_TO_TOP_START => "Scrolling to top",
        SCROLL_TO_TOP_OK => "Scrolled to top",
        SCROLL_TO_BOTTOM_START => "Scrolling to bottom",
        SCROLL_TO_BOTTOM_OK => "Scrolled to bottom",
        PREVIOUS_PAGE_START => "Scrolling to previous page",
        PREVIOUS_PAGE_OK => "Scrolled to previous page",
        NEXT_PAGE_START => "Scrolling to next page",
        NEXT_PAGE_OK => "Scrolled to next page",
        SCROLL_TO_TEXT_START => "Scrolling to text: $1 (occurrence $2)",
        SCROLL_TO_TEXT_OK => "Scrolled to text: $1 (occurrence $2)",
        SCROLL_TO_TEXT_NOT_FOUND => "Text '$1' (occurrence $2) not found or not visible on page",
        SCROLL_TO_TEXT_FAILED => "Failed to scroll to text: $1",

        GET_DROPDOWN_OPTIONS_START => "Getting options from dropdown with index $1",
        GET_DROPDOWN_OPTIONS_OK => "Got $1 options from dropdown",
        GET_DROPDOWN_OPTIONS_NO_OPTIONS => "No options found in dropdown",
        GET_DROPDOWN_OPTIONS_USE_EXACT_TEXT => {
            "Use the exact text string in select_dropdown_option"
        }
        GET_DROPDOWN_OPTIONS_FAILED => "Failed to get dropdown options: $1",
        SELECT_DROPDOWN_OPTION_START => "Selecting option \"$1\" from dropdown with index $2",
        SELECT_DROPDOWN_OPTION_OK => "Selected option \"$1\" from dropdown with index $2",
        SELECT_DROPDOWN_OPTION_NOT_SELECT => {
            "Cannot select option: element with index $1 is a $2, not a select"
        }
        SELECT_DROPDOWN_OPTION_FAILED => "Failed to select option: $1",

        ERROR_ELEMENT_NOT_EXIST => {
            "Element with index $1 does not exist - retry or use alternative actions"
        }
        ERROR_ELEMENT_NO_LONGER_AVAILABLE => {
            "Element with index $1 is no longer available - most likely the page changed"
        }
        ERROR_ALREADY_AT_TOP => "Element with index $1 is already at top, cannot scroll up",
        ERROR_ALREADY_AT_BOTTOM => {
            "Element with index $1 is already at bottom, cannot scroll down"
        }
        ERROR_PAGE_ALREADY_AT_TOP => "Page is already at top, cannot scroll up",
        ERROR_PAGE_ALREADY_AT_BOTTOM => "Page is already at bottom, cannot scroll down",
        ERROR_SCROLL_LIMIT_REACHED => {
            "Reached the limit of $1 page scrolls - finish with the findings collected so far"
        }
        _ => return None,
    };
    Some(text)
}

/// Fill `$1`, `$2`, ... placeholders in one pass. Placeholders without a
/// matching argument are kept verbatim.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut message = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != '$' {
            message.push(c);
            continue;
        }
        let mut end = start + 1;
        while let Some(&(i, d)) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            end = i + d.len_utf8();
            chars.next();
        }
        let arg = template[start + 1..end]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| args.get(i));
        match arg {
            Some(arg) => message.push_str(arg),
            None => message.push_str(&template[start..end]),
        }
    }
    message
}

/// Built-in English catalog. Unknown keys are returned as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl DefaultMessages {
    pub fn new() -> Self {
        Self
    }

    /// Whether the catalog has a template for `key`.
    pub fn contains(&self, key: &str) -> bool {
        template(key).is_some()
    }
}

impl MessageFormatter for DefaultMessages {
    fn t(&self, key: &str, args: &[&str]) -> String {
        match template(key) {
            Some(text) => format_message(text, args),
            None => key.to_string(),
        }
    }
}
