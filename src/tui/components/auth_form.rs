//! # Login and Signup Views
//!
//! Both screens share one layout: heading, subheading, a stack of
//! `TextField`s, the submit button and a footer link. `focus` is the index
//! of the focused field and is owned by `TuiState`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::form::{LoginForm, SignupForm};
use crate::core::theme::Theme;
use crate::core::validation::FormField;
use crate::tui::component::Component;
use crate::tui::components::text_field::{FIELD_HEIGHT, TextField};
use crate::tui::palette;

const FORM_WIDTH: u16 = 56;

struct FormChrome<'a> {
    heading: &'a str,
    subheading: &'a str,
    button: &'a str,
    footer_prompt: &'a str,
    footer_link: &'a str,
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Enter your name",
        FormField::Email => "Enter your email",
        FormField::Password => "Enter your password",
    }
}

fn render_form(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    chrome: FormChrome,
    fields: Vec<TextField>,
) {
    let mut constraints = vec![
        Constraint::Length(1), // heading
        Constraint::Length(1), // subheading
        Constraint::Length(1),
    ];
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.extend([
        Constraint::Length(1), // button
        Constraint::Length(1),
        Constraint::Length(1), // footer
        Constraint::Length(1), // hint
    ]);

    let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let rows = Layout::vertical(constraints).flex(Flex::Center).split(column);

    frame.render_widget(
        Paragraph::new(Span::styled(chrome.heading, palette::title(theme))),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(chrome.subheading, palette::subtitle(theme))),
        rows[1],
    );

    let field_count = fields.len();
    for (i, mut field) in fields.into_iter().enumerate() {
        field.render(frame, rows[3 + i]);
    }

    let button_row = rows[3 + field_count];
    frame.render_widget(
        Paragraph::new(chrome.button)
            .alignment(Alignment::Center)
            .style(palette::button(theme)),
        button_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(chrome.footer_prompt, palette::secondary(theme)),
            Span::styled(chrome.footer_link, palette::fg(theme.colors.highlight)),
        ]))
        .alignment(Alignment::Center),
        rows[5 + field_count],
    );
    frame.render_widget(
        Paragraph::new("Tab next field · Enter submit · Esc back")
            .alignment(Alignment::Center)
            .style(palette::secondary(theme)),
        rows[6 + field_count],
    );
}

pub struct LoginView<'a> {
    pub form: &'a LoginForm,
    pub focus: usize,
    pub theme: &'a Theme,
}

impl Component for LoginView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let fields = LoginForm::FIELDS
            .iter()
            .enumerate()
            .map(|(i, &field)| {
                let value = match field {
                    FormField::Password => self.form.password.as_str(),
                    _ => self.form.email.as_str(),
                };
                TextField::new(field.label(), value, theme)
                    .placeholder(placeholder(field))
                    .masked(field == FormField::Password)
                    .focused(i == self.focus)
                    .error(self.form.error(field))
            })
            .collect();

        render_form(
            frame,
            area,
            theme,
            FormChrome {
                heading: "Welcome Back",
                subheading: "Please sign in to continue",
                button: "Sign In",
                footer_prompt: "Don't have an account? ",
                footer_link: "Sign Up (Ctrl+N)",
            },
            fields,
        );
    }
}

pub struct SignupView<'a> {
    pub form: &'a SignupForm,
    pub focus: usize,
    pub theme: &'a Theme,
}

impl Component for SignupView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let fields = SignupForm::FIELDS
            .iter()
            .enumerate()
            .map(|(i, &field)| {
                let value = match field {
                    FormField::Name => self.form.name.as_str(),
                    FormField::Email => self.form.email.as_str(),
                    FormField::Password => self.form.password.as_str(),
                };
                TextField::new(field.label(), value, theme)
                    .placeholder(placeholder(field))
                    .masked(field == FormField::Password)
                    .focused(i == self.focus)
                    .error(self.form.error(field))
            })
            .collect();

        render_form(
            frame,
            area,
            theme,
            FormChrome {
                heading: "Create an Account",
                subheading: "Sign up to start renting",
                button: "Sign Up",
                footer_prompt: "Already have an account? ",
                footer_link: "Log In (Ctrl+N)",
            },
            fields,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_login_view_shows_field_errors() {
        let mut form = LoginForm::new();
        form.email = "nope".to_string();
        form.submit(|_| {});

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                LoginView {
                    form: &form,
                    focus: 0,
                    theme: Theme::light(),
                }
                .render(f, f.area())
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Welcome Back"));
        assert!(text.contains("Sign In"));
        assert!(text.contains("Please enter a valid email address."));
    }

    #[test]
    fn test_signup_view_has_three_fields() {
        let form = SignupForm::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| {
                SignupView {
                    form: &form,
                    focus: 2,
                    theme: Theme::dark(),
                }
                .render(f, f.area())
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Create an Account"));
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("Password"));
        assert!(text.contains("Log In (Ctrl+N)"));
    }
}
