use std::rc::Rc;

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Profession {
    #[serde(rename = "Actuaire")]
    Actuary,
    #[serde(rename = "Risk Manager")]
    RiskManager,
    #[serde(rename = "Analyste Financier")]
    FinancialAnalyst,
    #[serde(rename = "Compliance Officer")]
    ComplianceOfficer,
    #[serde(rename = "Directeur Financier")]
    FinanceDirector,
    #[serde(rename = "Consultant")]
    Consultant,
    #[serde(rename = "Autre")]
    Other,
}

impl Profession {
    pub const ALL: [Profession; 7] = [
        Profession::Actuary,
        Profession::RiskManager,
        Profession::FinancialAnalyst,
        Profession::ComplianceOfficer,
        Profession::FinanceDirector,
        Profession::Consultant,
        Profession::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Profession::Actuary => "Actuaire",
            Profession::RiskManager => "Risk Manager",
            Profession::FinancialAnalyst => "Analyste Financier",
            Profession::ComplianceOfficer => "Compliance Officer",
            Profession::FinanceDirector => "Directeur Financier",
            Profession::Consultant => "Consultant",
            Profession::Other => "Autre",
        }
    }

    /// Parses a `<select>` value. The placeholder option (empty value) maps to `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == value)
    }
}

/// Everything the signup form collects before handing it to the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub password: String,
    pub confirm_password: String,
    pub profession: Option<Profession>,
    pub accept_terms: bool,
}

/// One edit of one input. Each variant carries the new value for that field.
#[derive(Clone, Debug, PartialEq)]
pub enum SignupField {
    FirstName(String),
    LastName(String),
    Email(String),
    Company(String),
    Password(String),
    ConfirmPassword(String),
    Profession(Option<Profession>),
    AcceptTerms(bool),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Les mots de passe ne correspondent pas")]
    PasswordMismatch,
}

impl SignupFormData {
    pub fn apply(&mut self, field: SignupField) {
        match field {
            SignupField::FirstName(value) => self.first_name = value,
            SignupField::LastName(value) => self.last_name = value,
            SignupField::Email(value) => self.email = value,
            SignupField::Company(value) => self.company = value,
            SignupField::Password(value) => self.password = value,
            SignupField::ConfirmPassword(value) => self.confirm_password = value,
            SignupField::Profession(value) => self.profession = value,
            SignupField::AcceptTerms(value) => self.accept_terms = value,
        }
    }

    pub fn validate(&self) -> Result<(), SignupError> {
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(())
    }

    /// Copy safe to log: both password fields are blanked.
    pub fn redacted(&self) -> Self {
        Self {
            password: String::new(),
            confirm_password: String::new(),
            ..self.clone()
        }
    }
}

impl Reducible for SignupFormData {
    type Action = SignupField;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Validates `data` and, only if it passes, hands a copy to `on_signup`.
pub fn submit(data: &SignupFormData, on_signup: &Callback<SignupFormData>) -> Result<(), SignupError> {
    data.validate()?;
    on_signup.emit(data.clone());
    Ok(())
}

pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub(crate) const AUTH_STYLES: &str = r#"
.auth-container {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 6rem 1rem 2rem;
}
.auth-card {
    background: rgba(255, 255, 255, 0.96);
    border-radius: 20px;
    padding: 2.5rem;
    width: 100%;
    max-width: 560px;
    box-shadow: 0 20px 60px rgba(15, 23, 42, 0.15);
}
.auth-header {
    text-align: center;
    margin-bottom: 2rem;
}
.auth-header h2 {
    font-size: 2rem;
    margin-bottom: 0.5rem;
    background: linear-gradient(135deg, #667eea, #764ba2);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.auth-header p {
    color: #64748b;
}
.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}
.form-group {
    display: flex;
    flex-direction: column;
    margin-bottom: 1.1rem;
}
.form-group label {
    font-weight: 600;
    font-size: 0.9rem;
    margin-bottom: 0.4rem;
    color: #1e293b;
}
.form-group input,
.form-group select {
    padding: 0.75rem 1rem;
    border: 1px solid #cbd5e1;
    border-radius: 10px;
    font-size: 0.95rem;
    transition: border-color 0.2s ease, box-shadow 0.2s ease;
}
.form-group input:focus,
.form-group select:focus {
    outline: none;
    border-color: #667eea;
    box-shadow: 0 0 0 3px rgba(102, 126, 234, 0.2);
}
.form-options {
    margin: 0.5rem 0 1.5rem;
}
.checkbox-label {
    display: flex;
    align-items: flex-start;
    gap: 0.6rem;
    font-size: 0.85rem;
    color: #475569;
}
.checkbox-label a {
    color: #667eea;
}
.btn-full {
    width: 100%;
    justify-content: center;
}
.auth-divider {
    text-align: center;
    margin: 1.5rem 0;
    color: #94a3b8;
    font-size: 0.85rem;
}
.auth-switch {
    text-align: center;
    color: #64748b;
    font-size: 0.9rem;
}
.switch-link {
    background: none;
    border: none;
    color: #667eea;
    font-weight: 600;
    cursor: pointer;
    margin-left: 0.25rem;
}
@media (max-width: 640px) {
    .form-row {
        grid-template-columns: 1fr;
    }
    .auth-card {
        padding: 1.75rem;
    }
}
"#;

#[derive(Properties, PartialEq)]
pub struct SignupProps {
    pub on_switch_to_login: Callback<()>,
    pub on_signup: Callback<SignupFormData>,
}

#[function_component(Signup)]
pub fn signup(props: &SignupProps) -> Html {
    let form = use_reducer(SignupFormData::default);

    let text_input = |field: fn(String) -> SignupField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(field(input.value()));
        })
    };

    let on_profession = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(SignupField::Profession(Profession::from_label(&select.value())));
        })
    };

    let on_accept_terms = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(SignupField::AcceptTerms(input.checked()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_signup = props.on_signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit(&form, &on_signup) {
                Ok(()) => info!("Signup form handed off for {}", form.email),
                Err(err) => {
                    warn!("Signup submission rejected: {}", err);
                    alert(&err.to_string());
                }
            }
        })
    };

    let switch_to_login = {
        let on_switch_to_login = props.on_switch_to_login.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Switching from signup to login");
            on_switch_to_login.emit(());
        })
    };

    html! {
        <div class="auth-container">
            <style>{AUTH_STYLES}</style>
            <div class="auth-card">
                <div class="auth-header">
                    <h2>{"Inscription"}</h2>
                    <p>{"Rejoignez notre communauté d'experts"}</p>
                </div>

                <form onsubmit={onsubmit} class="auth-form">
                    <div class="form-row">
                        <div class="form-group">
                            <label for="firstName">{"Prénom"}</label>
                            <input
                                type="text"
                                id="firstName"
                                name="firstName"
                                value={form.first_name.clone()}
                                oninput={text_input(SignupField::FirstName)}
                                placeholder="Votre prénom"
                                required=true
                            />
                        </div>
                        <div class="form-group">
                            <label for="lastName">{"Nom"}</label>
                            <input
                                type="text"
                                id="lastName"
                                name="lastName"
                                value={form.last_name.clone()}
                                oninput={text_input(SignupField::LastName)}
                                placeholder="Votre nom"
                                required=true
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email professionnel"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value={form.email.clone()}
                            oninput={text_input(SignupField::Email)}
                            placeholder="votre@entreprise.com"
                            required=true
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="company">{"Entreprise"}</label>
                            <input
                                type="text"
                                id="company"
                                name="company"
                                value={form.company.clone()}
                                oninput={text_input(SignupField::Company)}
                                placeholder="Nom de votre entreprise"
                                required=true
                            />
                        </div>
                        <div class="form-group">
                            <label for="profession">{"Profession"}</label>
                            <select id="profession" name="profession" onchange={on_profession} required=true>
                                <option value="" selected={form.profession.is_none()}>{"Sélectionnez..."}</option>
                                {
                                    Profession::ALL.iter().map(|profession| {
                                        html! {
                                            <option
                                                key={profession.label()}
                                                value={profession.label()}
                                                selected={form.profession == Some(*profession)}
                                            >
                                                {profession.label()}
                                            </option>
                                        }
                                    }).collect::<Html>()
                                }
                            </select>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="password">{"Mot de passe"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            value={form.password.clone()}
                            oninput={text_input(SignupField::Password)}
                            placeholder="Minimum 8 caractères"
                            minlength={config::PASSWORD_MIN_LENGTH}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="confirmPassword">{"Confirmer le mot de passe"}</label>
                        <input
                            type="password"
                            id="confirmPassword"
                            name="confirmPassword"
                            value={form.confirm_password.clone()}
                            oninput={text_input(SignupField::ConfirmPassword)}
                            placeholder="Retapez votre mot de passe"
                            required=true
                        />
                    </div>

                    <div class="form-options">
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                name="acceptTerms"
                                checked={form.accept_terms}
                                onchange={on_accept_terms}
                                required=true
                            />
                            <span>
                                {"J'accepte les "}
                                <a href="#">{"conditions d'utilisation"}</a>
                                {" et la "}
                                <a href="#">{"politique de confidentialité"}</a>
                            </span>
                        </label>
                    </div>

                    <button type="submit" class="btn btn-primary btn-full">
                        {"Créer mon compte"}
                    </button>
                </form>

                <div class="auth-divider">
                    <span>{"Ou"}</span>
                </div>

                <div class="auth-switch">
                    <p>
                        {"Déjà inscrit ?"}
                        <button type="button" onclick={switch_to_login} class="switch-link">
                            {"Se connecter"}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording_callback() -> (Callback<SignupFormData>, Rc<RefCell<Vec<SignupFormData>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let callback = Callback::from(move |data: SignupFormData| sink.borrow_mut().push(data));
        (callback, received)
    }

    fn filled(password: &str, confirm: &str) -> SignupFormData {
        let mut data = SignupFormData::default();
        for field in [
            SignupField::FirstName("Claire".to_string()),
            SignupField::LastName("Martin".to_string()),
            SignupField::Email("claire@assur.fr".to_string()),
            SignupField::Company("Assur SA".to_string()),
            SignupField::Profession(Some(Profession::Actuary)),
            SignupField::Password(password.to_string()),
            SignupField::ConfirmPassword(confirm.to_string()),
            SignupField::AcceptTerms(true),
        ] {
            data.apply(field);
        }
        data
    }

    #[test]
    fn test_starts_empty() {
        let data = SignupFormData::default();
        assert!(data.first_name.is_empty());
        assert!(data.password.is_empty());
        assert_eq!(data.profession, None);
        assert!(!data.accept_terms);
    }

    #[test]
    fn test_field_keeps_last_entered_value() {
        let mut data = SignupFormData::default();
        data.apply(SignupField::Email("a".to_string()));
        data.apply(SignupField::Company("Acme".to_string()));
        data.apply(SignupField::Email("ab@x.io".to_string()));
        data.apply(SignupField::AcceptTerms(true));
        data.apply(SignupField::AcceptTerms(false));
        data.apply(SignupField::Profession(Some(Profession::Consultant)));
        data.apply(SignupField::Profession(None));

        assert_eq!(data.email, "ab@x.io");
        assert_eq!(data.company, "Acme");
        assert!(!data.accept_terms);
        assert_eq!(data.profession, None);
        assert!(data.first_name.is_empty());
    }

    #[test]
    fn test_reducer_leaves_previous_state_untouched() {
        let before = Rc::new(SignupFormData::default());
        let after = before.clone().reduce(SignupField::FirstName("Jean".to_string()));
        assert_eq!(after.first_name, "Jean");
        assert!(before.first_name.is_empty());
    }

    #[test]
    fn test_matching_passwords_hand_off_once() {
        let (callback, received) = recording_callback();
        let data = filled("abcd1234", "abcd1234");

        assert_eq!(submit(&data, &callback), Ok(()));

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], data);
        assert_eq!(received[0].password, "abcd1234");
        assert_eq!(received[0].confirm_password, "abcd1234");
    }

    #[test]
    fn test_mismatched_passwords_never_hand_off() {
        let (callback, received) = recording_callback();
        let data = filled("abcd1234", "abcd1235");
        let snapshot = data.clone();

        assert_eq!(submit(&data, &callback), Err(SignupError::PasswordMismatch));
        assert!(received.borrow().is_empty());
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_resubmit_after_correction() {
        let (callback, received) = recording_callback();
        let mut data = filled("abcd1234", "abcd1235");
        assert!(submit(&data, &callback).is_err());

        data.apply(SignupField::ConfirmPassword("abcd1234".to_string()));
        assert!(submit(&data, &callback).is_ok());
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(received.borrow()[0].first_name, "Claire");
    }

    #[test]
    fn test_empty_passwords_count_as_matching() {
        assert_eq!(SignupFormData::default().validate(), Ok(()));
    }

    #[test]
    fn test_mismatch_message() {
        assert_eq!(
            SignupError::PasswordMismatch.to_string(),
            "Les mots de passe ne correspondent pas"
        );
    }

    #[test]
    fn test_profession_select_values() {
        for profession in Profession::ALL {
            assert_eq!(Profession::from_label(profession.label()), Some(profession));
        }
        assert_eq!(Profession::from_label(""), None);
        assert_eq!(Profession::from_label("Astronaute"), None);
    }

    #[test]
    fn test_serializes_with_form_field_names() {
        let json = serde_json::to_value(filled("abcd1234", "abcd1234")).unwrap();
        assert_eq!(json["firstName"], "Claire");
        assert_eq!(json["confirmPassword"], "abcd1234");
        assert_eq!(json["profession"], "Actuaire");
        assert_eq!(json["acceptTerms"], true);
    }

    #[test]
    fn test_redacted_blanks_only_passwords() {
        let redacted = filled("abcd1234", "abcd1234").redacted();
        assert!(redacted.password.is_empty());
        assert!(redacted.confirm_password.is_empty());
        assert_eq!(redacted.email, "claire@assur.fr");
        assert_eq!(redacted.profession, Some(Profession::Actuary));
    }
}
