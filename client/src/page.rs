//! Top-level page wiring.
//!
//! [`Page`] owns one instance of every interactive component and is built
//! once when the page loads. The embedding shell translates DOM events into
//! calls on it and renders from the state it exposes.

use std::time::Instant;

use tracing::warn;
use url::Url;

use crate::{
    consent::{ConsentStorage, CookieNotice},
    form::{ContactForm, SubmitControl},
    header::HeaderScroll,
    menu::NavMenu,
    notify::{NotificationCenter, NotificationKind},
    relay::RelayClient,
};

pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you soon.";
pub const SUBMIT_ERROR_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

/// What the shell should do with a clicked navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Smooth-scroll to an in-page fragment, offset by the rendered header
    /// height so the target is not hidden underneath it.
    ScrollTo { fragment: String, offset: u32 },
    /// A different page: let the browser navigate.
    Navigate(String),
}

pub struct Page {
    pub menu: NavMenu,
    pub header: HeaderScroll,
    pub notifications: NotificationCenter,
    pub form: ContactForm,
    cookie_notice: CookieNotice,
    submit: SubmitControl,
    relay: RelayClient,
    storage: Box<dyn ConsentStorage>,
    current_url: Url,
    header_height: u32,
}

impl Page {
    pub fn new(current_url: Url, relay: RelayClient, storage: Box<dyn ConsentStorage>) -> Self {
        let cookie_notice = CookieNotice::new(storage.as_ref());

        Self {
            menu: NavMenu::new(),
            header: HeaderScroll::new(),
            notifications: NotificationCenter::new(),
            form: ContactForm::default(),
            cookie_notice,
            submit: SubmitControl::new(),
            relay,
            storage,
            current_url,
            header_height: 0,
        }
    }

    /// The shell reports the header's rendered height so fragment scrolls
    /// can land below it.
    pub fn set_header_height(&mut self, px: u32) {
        self.header_height = px;
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn cookie_notice(&self) -> &CookieNotice {
        &self.cookie_notice
    }

    pub fn storage(&self) -> &dyn ConsentStorage {
        self.storage.as_ref()
    }

    /// Routes a clicked navigation link. The mobile menu closes either way;
    /// only same-page fragments turn into smooth scrolls.
    pub fn handle_link_click(&mut self, href: &str) -> LinkAction {
        self.menu.close();

        match self.same_page_fragment(href) {
            Some(fragment) => LinkAction::ScrollTo {
                fragment,
                offset: self.header_height,
            },
            None => LinkAction::Navigate(href.to_string()),
        }
    }

    /// A href targets the current page when it is a bare `#fragment`, or
    /// resolves against the current URL to the same origin and path
    /// (trailing slashes ignored) while carrying a fragment.
    fn same_page_fragment(&self, href: &str) -> Option<String> {
        if let Some(fragment) = href.strip_prefix('#') {
            return Some(fragment.to_string());
        }

        let url = Url::options()
            .base_url(Some(&self.current_url))
            .parse(href)
            .ok()?;

        let fragment = url.fragment().filter(|f| !f.is_empty())?;

        if url.origin() != self.current_url.origin() {
            return None;
        }

        let target = url.path().trim_end_matches('/');
        let current = self.current_url.path().trim_end_matches('/');

        (target == current).then(|| fragment.to_string())
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn handle_resize(&mut self, viewport_width: u32) {
        self.menu.handle_resize(viewport_width);
    }

    pub fn handle_scroll(&mut self, scroll_y: u32, now: Instant) {
        self.header.on_scroll(scroll_y, now);
    }

    pub fn accept_cookies(&mut self) {
        self.cookie_notice.accept(self.storage.as_mut());
    }

    pub fn dismiss_notification(&mut self, now: Instant) {
        self.notifications.dismiss(now);
    }

    /// Timer callback; drives notification transitions.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);
    }

    /// Validates and sends the contact form.
    ///
    /// Validation failures never reach the network. A successful relay
    /// round-trip clears the form; any failure leaves it populated so the
    /// user can resubmit. The submit control is restored in every case.
    pub async fn submit_contact_form(&mut self, now: Instant) {
        let submission = match self.form.validate() {
            Ok(submission) => submission,
            Err(e) => {
                self.notifications
                    .show(e.to_string(), NotificationKind::Error, now);
                return;
            }
        };

        self.submit.begin_sending();

        match self.relay.submit(&submission).await {
            Ok(()) => {
                self.notifications
                    .show(SUBMIT_SUCCESS_MESSAGE, NotificationKind::Success, now);
                self.form.clear();
            }
            Err(e) => {
                warn!("Contact form submission failed: {e}");
                self.notifications
                    .show(SUBMIT_ERROR_MESSAGE, NotificationKind::Error, now);
            }
        }

        self.submit.reset();
    }
}

#[cfg(test)]
mod tests {
    use crate::consent::MemoryStorage;
    use crate::menu::MenuState;

    use super::*;

    fn page_at(url: &str) -> Page {
        let relay = RelayClient::new(Url::parse("https://relay.example/f/demo").unwrap());

        Page::new(
            Url::parse(url).unwrap(),
            relay,
            Box::new(MemoryStorage::new()),
        )
    }

    #[test]
    fn bare_fragment_scrolls_with_header_offset() {
        let mut page = page_at("https://site.example/");
        page.set_header_height(72);

        assert_eq!(
            page.handle_link_click("#contact"),
            LinkAction::ScrollTo {
                fragment: "contact".into(),
                offset: 72,
            }
        );
    }

    #[test]
    fn same_page_href_with_fragment_scrolls() {
        let mut page = page_at("https://site.example/index");

        assert_eq!(
            page.handle_link_click("/index#about"),
            LinkAction::ScrollTo {
                fragment: "about".into(),
                offset: 0,
            }
        );
    }

    #[test]
    fn trailing_slash_does_not_defeat_fragment_detection() {
        let mut page = page_at("https://site.example/shop/");

        assert_eq!(
            page.handle_link_click("/shop#hours"),
            LinkAction::ScrollTo {
                fragment: "hours".into(),
                offset: 0,
            }
        );
    }

    #[test]
    fn other_page_href_navigates() {
        let mut page = page_at("https://site.example/");

        assert_eq!(
            page.handle_link_click("/shop#hours"),
            LinkAction::Navigate("/shop#hours".into())
        );
    }

    #[test]
    fn other_origin_href_navigates() {
        let mut page = page_at("https://site.example/index");

        assert_eq!(
            page.handle_link_click("https://elsewhere.example/index#about"),
            LinkAction::Navigate("https://elsewhere.example/index#about".into())
        );
    }

    #[test]
    fn fragmentless_href_navigates() {
        let mut page = page_at("https://site.example/");

        assert_eq!(
            page.handle_link_click("/shop"),
            LinkAction::Navigate("/shop".into())
        );
    }

    #[test]
    fn any_link_click_closes_menu() {
        let mut page = page_at("https://site.example/");
        page.toggle_menu();

        page.handle_link_click("/shop");

        assert_eq!(page.menu.state(), MenuState::Closed);
    }

    #[test]
    fn fragment_click_closes_menu_too() {
        let mut page = page_at("https://site.example/");
        page.toggle_menu();

        page.handle_link_click("#top");

        assert_eq!(page.menu.state(), MenuState::Closed);
    }

    #[test]
    fn accept_cookies_persists_flag() {
        use crate::consent::{CONSENT_KEY, CONSENT_VALUE};

        let mut page = page_at("https://site.example/");
        assert!(page.cookie_notice().visible());

        page.accept_cookies();

        assert!(!page.cookie_notice().visible());
        assert_eq!(
            page.storage().get(CONSENT_KEY).as_deref(),
            Some(CONSENT_VALUE)
        );
    }

    #[test]
    fn notice_hidden_when_flag_already_stored() {
        use crate::consent::{CONSENT_KEY, CONSENT_VALUE, ConsentStorage};

        let mut storage = MemoryStorage::new();
        storage.set(CONSENT_KEY, CONSENT_VALUE);
        let relay = RelayClient::new(Url::parse("https://relay.example/f/demo").unwrap());

        let page = Page::new(
            Url::parse("https://site.example/").unwrap(),
            relay,
            Box::new(storage),
        );

        assert!(!page.cookie_notice().visible());
    }
}
