//! Application state and key handling for the coupon editor

use crate::config::FormConfig;
use crate::state::{CouponData, CouponField, CouponFormState, DecimalInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::Cell;
use std::fmt::Write;
use std::rc::Rc;

/// Main application struct
pub struct App {
    /// Form state bound to the view
    pub form_state: CouponFormState,
    /// User configuration
    pub config: FormConfig,
    /// Index into [`CouponField::ALL`]
    pub active_field: usize,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Typed text of the active decimal field, kept between keystrokes
    decimal_draft: Option<DecimalInput>,
    /// Coupon given on the command line, reloaded with Ctrl+L
    startup_coupon: Option<CouponData>,
    /// Set by form/title subscribers and by key handling
    needs_redraw: Rc<Cell<bool>>,
    quit: bool,
}

impl App {
    /// Create a new App, loading `startup_coupon` into the form when present
    pub fn new(config: FormConfig, startup_coupon: Option<CouponData>) -> Self {
        Self::with_form_state(config, CouponFormState::new(), startup_coupon)
    }

    pub fn with_form_state(
        config: FormConfig,
        mut form_state: CouponFormState,
        startup_coupon: Option<CouponData>,
    ) -> Self {
        let needs_redraw = Rc::new(Cell::new(true));

        let flag = Rc::clone(&needs_redraw);
        form_state.form_mut().subscribe(move |_| flag.set(true));
        let flag = Rc::clone(&needs_redraw);
        form_state.on_title_change(move |title| {
            tracing::info!(%title, "form mode changed");
            flag.set(true);
        });

        if let Some(coupon) = &startup_coupon {
            form_state.load(Some(coupon));
        }

        Self {
            form_state,
            config,
            active_field: 0,
            status_message: None,
            decimal_draft: None,
            startup_coupon,
            needs_redraw,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Returns true once after any change that requires a redraw
    pub fn take_needs_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    pub fn active_field(&self) -> CouponField {
        CouponField::at(self.active_field).unwrap_or(CouponField::Title)
    }

    /// Text shown for a field, preferring the in-progress decimal draft
    pub fn field_display(&self, field: CouponField) -> String {
        match &self.decimal_draft {
            Some(draft) if field == self.active_field() => draft.as_str().to_string(),
            _ => field.display_value(self.form_state.form().get()),
        }
    }

    /// Due date rendered with the configured format
    pub fn due_date_display(&self) -> String {
        let coupon = self.form_state.form().get();
        let Some(due) = coupon.due_date_utc() else {
            return "(out of range)".to_string();
        };
        let mut rendered = String::new();
        if write!(rendered, "{}", due.format(self.config.date_format())).is_err() {
            return due.to_rfc3339();
        }
        rendered
    }

    pub fn next_field(&mut self) {
        self.decimal_draft = None;
        self.active_field = (self.active_field + 1) % CouponField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.decimal_draft = None;
        if self.active_field == 0 {
            self.active_field = CouponField::ALL.len() - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.request_redraw();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            self.decimal_draft = None;
            match key.code {
                KeyCode::Char('c') => self.quit = true,
                KeyCode::Char('r') => {
                    self.form_state.reset();
                    self.status_message = Some("Form reset".to_string());
                }
                KeyCode::Char('l') => {
                    self.form_state.load(self.startup_coupon.as_ref());
                    self.status_message = Some(match &self.startup_coupon {
                        Some(coupon) => format!("Reloaded coupon {}", coupon.id),
                        None => "No coupon to reload, form reset".to_string(),
                    });
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Backspace if self.active_field().is_decimal() => {
                self.edit_decimal(|draft| {
                    draft.pop();
                    true
                });
            }
            KeyCode::Char(c) if self.active_field().is_decimal() => {
                let accepted = self.edit_decimal(|draft| draft.push(c));
                self.report_key(c, accepted);
            }
            KeyCode::Backspace => {
                let field = self.active_field();
                self.form_state
                    .form_mut()
                    .update(|coupon| field.pop_char(coupon));
            }
            KeyCode::Char(c) => {
                let field = self.active_field();
                let accepted = self
                    .form_state
                    .form_mut()
                    .update(|coupon| field.push_char(coupon, c));
                self.report_key(c, accepted);
            }
            _ => {}
        }
    }

    /// Apply `edit` to the active decimal field's draft and store the parsed value
    fn edit_decimal(&mut self, edit: impl FnOnce(&mut DecimalInput) -> bool) -> bool {
        let field = self.active_field();
        let mut draft = self.decimal_draft.take().unwrap_or_else(|| {
            let value = field
                .decimal_value(self.form_state.form().get())
                .unwrap_or_default();
            DecimalInput::from_value(value)
        });
        let accepted = edit(&mut draft);
        let value = draft.value();
        self.form_state
            .form_mut()
            .update(|coupon| field.set_decimal(coupon, value));
        self.decimal_draft = Some(draft);
        accepted
    }

    fn report_key(&mut self, c: char, accepted: bool) {
        let field = self.active_field();
        self.status_message = if accepted {
            None
        } else {
            tracing::debug!(?field, %c, "key ignored");
            Some(format!("'{c}' is not valid for {}", field.label()))
        };
    }
}
