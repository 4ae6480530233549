//! Boot sequence.
//!
//! ARCHITECTURE
//! ============
//! The page is wired by a fixed list of [`Initializer`]s. Each one owns a
//! single area of the page and fails on its own: [`run_initializers`] runs
//! every entry, logs the failures by name and reports the tally. The
//! browser-only [`Portfolio`] holds the services shared between initializers
//! (notifier, modal slot, project catalog) and is kept alive for the page's
//! lifetime so the exported script hooks can reach it.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::error::UiError;

/// One named page feature and the routine that wires it.
pub struct Initializer<'a> {
    pub name: &'static str,
    run: Box<dyn FnOnce() -> Result<(), UiError> + 'a>,
}

impl<'a> Initializer<'a> {
    pub fn new(name: &'static str, run: impl FnOnce() -> Result<(), UiError> + 'a) -> Self {
        Self { name, run: Box::new(run) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    pub succeeded: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

/// Run every initializer in order, regardless of earlier failures.
pub fn run_initializers(initializers: Vec<Initializer<'_>>) -> InitReport {
    let mut report = InitReport::default();
    for Initializer { name, run } in initializers {
        match run() {
            Ok(()) => report.succeeded.push(name),
            Err(err) => {
                log::error!("initializer {name} failed: {err}");
                report.failed.push(name);
            }
        }
    }
    report
}

#[cfg(feature = "browser")]
pub use browser::{Portfolio, boot, with_portfolio};

#[cfg(feature = "browser")]
mod browser {
    use std::cell::RefCell;

    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, ErrorEvent, Window};

    use super::{Initializer, run_initializers};
    use crate::components::modal::ModalController;
    use crate::components::toast::DomNotifier;
    use crate::components::{contact_form, nav, parallax, projects, resume, reveal, theme_toggle, touch};
    use crate::config::SiteConfig;
    use crate::error::UiError;
    use crate::state::projects::CatalogSlot;
    use crate::util::dom;

    thread_local! {
        static PORTFOLIO: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
    }

    /// Services shared by the page features.
    pub struct Portfolio {
        window: Window,
        document: Document,
        config: SiteConfig,
        catalog: CatalogSlot,
        notifier: DomNotifier,
        modal: ModalController,
    }

    impl Portfolio {
        /// Resolve the browser globals and build the shared services.
        ///
        /// # Errors
        ///
        /// Fails without a window or document. A malformed catalog only
        /// fails the `projects` initializer.
        pub fn new(config: SiteConfig) -> Result<Self, UiError> {
            let window = dom::window()?;
            let document = window.document().ok_or(UiError::NoDocument)?;
            let catalog = CatalogSlot::builtin();
            let notifier = DomNotifier::new(document.clone());
            let modal = ModalController::new(document.clone(), notifier.clone());
            Ok(Self { window, document, config, catalog, notifier, modal })
        }

        fn initializers(&self) -> Vec<Initializer<'_>> {
            vec![
                Initializer::new("navigation", || nav::init(&self.document, &self.window)),
                Initializer::new("scroll-reveal", || reveal::init(&self.document, &self.window)),
                Initializer::new("projects", || {
                    projects::init(&self.document, self.catalog.get()?, self.modal.clone(), self.notifier.clone())
                }),
                Initializer::new("contact-form", || contact_form::init(&self.document, self.notifier.clone())),
                Initializer::new("resume", || resume::init(&self.document, self.notifier.clone())),
                Initializer::new("parallax", || parallax::init(&self.document, &self.window)),
                Initializer::new("touch", || touch::init(&self.document)),
                Initializer::new("theme", || theme_toggle::init(&self.document, &self.config)),
            ]
        }

        fn start(&self) {
            let report = run_initializers(self.initializers());
            if report.failed.is_empty() {
                log::info!("portfolio ready: {} features wired", report.succeeded.len());
            } else {
                log::info!(
                    "portfolio ready: {} features wired, {} failed ({})",
                    report.succeeded.len(),
                    report.failed.len(),
                    report.failed.join(", ")
                );
            }
        }

        pub fn open_project(&self, project_id: &str) {
            match self.catalog.get() {
                Ok(catalog) => projects::open_project(&catalog, &self.modal, &self.notifier, Some(project_id)),
                Err(err) => log::warn!("project {project_id} not opened: {err}"),
            }
        }

        pub fn download_resume(&self) {
            resume::download(&self.document, &self.notifier);
        }
    }

    /// Run `f` against the booted portfolio, if boot got that far.
    pub fn with_portfolio<R>(f: impl FnOnce(&Portfolio) -> R) -> Option<R> {
        PORTFOLIO.with(|slot| slot.borrow().as_ref().map(f))
    }

    /// Install logging, load config and wire the page once it is parsed.
    ///
    /// # Errors
    ///
    /// Fails only when the browser globals are unusable; individual feature
    /// failures are logged instead.
    pub fn boot() -> Result<(), UiError> {
        console_error_panic_hook::set_once();
        let document = dom::document()?;
        let (config, config_error) = SiteConfig::from_document(&document);
        if let Err(err) = console_log::init_with_level(config.log_level.into()) {
            web_sys::console::warn_1(&format!("logger already installed: {err}").into());
        }
        if let Some(err) = config_error {
            log::warn!("ignoring site config: {err}");
        }

        let window = dom::window()?;
        EventListener::new(&window, "error", |event| {
            let message = event.dyn_ref::<ErrorEvent>().map_or_else(|| event.type_(), ErrorEvent::message);
            log::error!("Portfolio Error: {message}");
        })
        .forget();

        let portfolio = Portfolio::new(config)?;
        PORTFOLIO.with(|slot| *slot.borrow_mut() = Some(portfolio));

        if document.ready_state() == "loading" {
            EventListener::once(&document, "DOMContentLoaded", |_| {
                with_portfolio(Portfolio::start);
            })
            .forget();
        } else {
            with_portfolio(Portfolio::start);
        }
        Ok(())
    }
}
