//! ViewModel for the contact form
//!
//! Fields are individual RwSignals; `submit` validates, posts and reports
//! the outcome through `error` / `success`.

use crate::domain::a002_contact_request::api;
use contracts::domain::a002_contact_request::aggregate::ContactRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the confirmation stays on screen, ms
const SUCCESS_VISIBLE_MS: u32 = 6_000;

#[derive(Clone, Copy)]
pub struct ContactFormVm {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub message: RwSignal<String>,

    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    /// Sequence of the last accepted request; a timer hides only its own confirmation
    accepted_seq: RwSignal<u32>,
}

impl ContactFormVm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            accepted_seq: RwSignal::new(0),
        }
    }

    /// Snapshot of the fields as a request DTO
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            message: self.message.get_untracked(),
        }
        .trimmed()
    }

    pub fn clear(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.message.set(String::new());
    }

    /// Validate locally; on success the request is ready to send
    pub fn validate(&self) -> Option<ContactRequest> {
        let request = self.to_request();
        match request.validate() {
            Ok(()) => {
                self.error.set(None);
                Some(request)
            }
            Err(e) => {
                self.success.set(None);
                self.error.set(Some(e.to_string()));
                None
            }
        }
    }

    /// Show the confirmation, returns its sequence number
    pub fn show_success(&self) -> u32 {
        self.accepted_seq.update(|seq| *seq = seq.wrapping_add(1));
        self.success
            .set(Some("Спасибо! Мы свяжемся с вами в ближайшее время.".to_string()));
        self.accepted_seq.get_untracked()
    }

    /// Hide the confirmation unless a newer one replaced it
    pub fn expire_success(&self, seq: u32) {
        if self.accepted_seq.get_untracked() == seq {
            self.success.set(None);
        }
    }

    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let Some(request) = self.validate() else {
            return;
        };

        let this = *self;
        this.submitting.set(true);
        spawn_local(async move {
            match api::submit_contact_request(&request).await {
                Ok(accepted) => {
                    log::info!("contact request accepted: {}", accepted.request_id);
                    this.clear();
                    let seq = this.show_success();
                    this.submitting.set(false);

                    gloo_timers::future::TimeoutFuture::new(SUCCESS_VISIBLE_MS).await;
                    this.expire_success(seq);
                }
                Err(e) => {
                    log::error!("contact request failed: {}", e);
                    this.error.set(Some(e));
                    this.submitting.set(false);
                }
            }
        });
    }
}

impl Default for ContactFormVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_request_trims_fields() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ContactFormVm::new();
            vm.name.set("  Ольга ".to_string());
            vm.email.set("olga@example.ru ".to_string());
            vm.message.set(" Нужен PoE коммутатор".to_string());

            let req = vm.to_request();
            assert_eq!(req.name, "Ольга");
            assert_eq!(req.email, "olga@example.ru");
            assert_eq!(req.message, "Нужен PoE коммутатор");
            assert!(req.phone.is_empty());
        });
    }

    #[test]
    fn test_validate_reports_first_error() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ContactFormVm::new();
            vm.name.set("Ольга".to_string());
            vm.email.set("olga".to_string());

            assert!(vm.validate().is_none());
            assert_eq!(vm.error.get_untracked().as_deref(), Some("Некорректный email"));

            vm.email.set("olga@example.ru".to_string());
            vm.message.set("Привет".to_string());
            assert!(vm.validate().is_some());
            assert_eq!(vm.error.get_untracked(), None);
        });
    }

    #[test]
    fn test_clear_empties_fields() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ContactFormVm::new();
            vm.phone.set("+7 495 123 45 67".to_string());
            vm.clear();
            assert_eq!(vm.to_request(), ContactRequest::default());
        });
    }

    #[test]
    fn test_stale_timer_keeps_newer_confirmation() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ContactFormVm::new();
            let first = vm.show_success();
            let second = vm.show_success();
            assert_ne!(first, second);

            vm.expire_success(first);
            assert!(vm.success.get_untracked().is_some());

            vm.expire_success(second);
            assert_eq!(vm.success.get_untracked(), None);
        });
    }
}
