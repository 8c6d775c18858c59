//! Coupon form state: the editable snapshot and its create/edit title

use crate::state::{Clock, CouponData, Observable, SubscriptionId, SystemClock};
use std::fmt;

/// The two labelling states of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "新增優惠券",
            FormMode::Edit => "編輯優惠券",
        }
    }
}

/// Holds one editable coupon and a title that follows the last load/reset.
///
/// `form` is handed out read-write so a view can bind to its fields;
/// `form_title` is read-only from outside.
pub struct CouponFormState {
    form: Observable<CouponData>,
    form_title: Observable<String>,
    clock: Box<dyn Clock>,
}

impl CouponFormState {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        let form = Observable::new(CouponData::initial(clock.as_ref()));
        Self {
            form,
            form_title: Observable::new(FormMode::Create.title().to_string()),
            clock,
        }
    }

    pub fn form(&self) -> &Observable<CouponData> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Observable<CouponData> {
        &mut self.form
    }

    pub fn form_title(&self) -> &Observable<String> {
        &self.form_title
    }

    /// Subscribe to title changes
    pub fn on_title_change(
        &mut self,
        subscriber: impl FnMut(&String) + 'static,
    ) -> SubscriptionId {
        self.form_title.subscribe(subscriber)
    }

    /// Load an existing coupon for editing, or reset when there is none
    pub fn load(&mut self, data: Option<&CouponData>) {
        match data {
            Some(coupon) => {
                tracing::debug!(id = %coupon.id, "loading coupon into form");
                self.form.set(coupon.clone());
                self.form_title.set(FormMode::Edit.title().to_string());
            }
            None => self.reset(),
        }
    }

    /// Replace the form with fresh defaults and switch to the create title
    pub fn reset(&mut self) {
        let initial = CouponData::initial(self.clock.as_ref());
        tracing::debug!(due_date = initial.due_date, "resetting coupon form");
        self.form.set(initial);
        self.form_title.set(FormMode::Create.title().to_string());
    }
}

impl Default for CouponFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CouponFormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CouponFormState")
            .field("form", &self.form)
            .field("form_title", &self.form_title)
            .finish_non_exhaustive()
    }
}
