use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

use super::{listen, query, query_all_in, set_class};
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::state::contact::Submission;

const FORM: &str = ".contact-form";
const SUBMIT: &str = r#"button[type="submit"]"#;
const NAMED_FIELDS: &str = "[name]";
const LOADING: &str = "loading";
const SENDING_LABEL: &str = r#"<span class="span">Sending...</span>"#;

struct ContactForm {
    window: Window,
    form: HtmlFormElement,
    button: HtmlButtonElement,
    submission: RefCell<Submission>,
    config: SiteConfig,
}

impl ContactForm {
    fn submit(self: &Rc<Self>) {
        if !self.submission.borrow_mut().begin(self.button.inner_html()) {
            log::debug!("Contact form already sending, ignoring submit");
            return;
        }
        set_class(&self.form, LOADING, true);
        self.button.set_disabled(true);
        self.button.set_inner_html(SENDING_LABEL);

        let this = self.clone();
        match self.config.contact_endpoint.clone() {
            Some(endpoint) => {
                let fields = self.fields();
                spawn_local(async move {
                    let outcome = post(&endpoint, &fields).await;
                    this.complete(outcome);
                });
            }
            None => {
                Timeout::new(self.config.contact_delay_ms, move || this.complete(Ok(()))).forget();
            }
        }
    }

    fn complete(&self, outcome: Result<()>) {
        set_class(&self.form, LOADING, false);
        self.button.set_disabled(false);
        if let Some(label) = self.submission.borrow_mut().finish() {
            self.button.set_inner_html(&label);
        }

        match outcome {
            Ok(()) => {
                log::info!("Contact form submitted");
                self.alert(&self.config.contact_success_message);
                self.form.reset();
            }
            Err(e) => {
                log::error!("Contact form submission failed: {}", e);
                self.alert(&self.config.contact_failure_message);
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }

    /// Named field values. Unchecked checkboxes and radios are left out.
    fn fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        for element in query_all_in(&self.form, NAMED_FIELDS) {
            let Some(name) = element.get_attribute("name") else {
                continue;
            };
            let value = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                let kind = input.type_();
                if (kind == "checkbox" || kind == "radio") && !input.checked() {
                    continue;
                }
                input.value()
            } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
                area.value()
            } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
                select.value()
            } else {
                continue;
            };
            fields.insert(name, value);
        }
        fields
    }
}

async fn post(endpoint: &str, fields: &BTreeMap<String, String>) -> Result<()> {
    let response = Request::post(endpoint).json(fields)?.send().await?;
    if !response.ok() {
        return Err(Error::Http(format!(
            "{} responded with status {}",
            endpoint,
            response.status()
        )));
    }
    Ok(())
}

/// Contact form submission: simulated with a fixed delay unless
/// `contact_endpoint` is configured.
pub fn attach(window: &Window, document: &Document, config: &SiteConfig) -> Result<()> {
    let Some(form) = query(document, FORM) else {
        log::debug!("No contact form on this page");
        return Ok(());
    };
    let form: HtmlFormElement = form
        .dyn_into()
        .map_err(|_| Error::MissingElement(FORM))?;
    let button = form
        .query_selector(SUBMIT)?
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok())
        .ok_or(Error::MissingElement(SUBMIT))?;

    let contact = Rc::new(ContactForm {
        window: window.clone(),
        form: form.clone(),
        button,
        submission: RefCell::new(Submission::default()),
        config: config.clone(),
    });

    listen(&form, "submit", move |event| {
        event.prevent_default();
        contact.submit();
    })
}
