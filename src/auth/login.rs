use std::rc::Rc;

use log::debug;
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::signup::AUTH_STYLES;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoginField {
    Email(String),
    Password(String),
    RememberMe(bool),
}

impl Reducible for LoginFormData {
    type Action = LoginField;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LoginField::Email(value) => next.email = value,
            LoginField::Password(value) => next.password = value,
            LoginField::RememberMe(value) => next.remember_me = value,
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_switch_to_signup: Callback<()>,
    pub on_login: Callback<LoginFormData>,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let form = use_reducer(LoginFormData::default);

    let on_email = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(LoginField::Email(input.value()));
        })
    };

    let on_password = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(LoginField::Password(input.value()));
        })
    };

    let on_remember = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(LoginField::RememberMe(input.checked()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit((*form).clone());
        })
    };

    let switch_to_signup = {
        let on_switch_to_signup = props.on_switch_to_signup.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Switching from login to signup");
            on_switch_to_signup.emit(());
        })
    };

    html! {
        <div class="auth-container">
            <style>{AUTH_STYLES}</style>
            <div class="auth-card">
                <div class="auth-header">
                    <h2>{"Connexion"}</h2>
                    <p>{"Accédez à votre espace expert"}</p>
                </div>

                <form onsubmit={onsubmit} class="auth-form">
                    <div class="form-group">
                        <label for="email">{"Email professionnel"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value={form.email.clone()}
                            oninput={on_email}
                            placeholder="votre@entreprise.com"
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Mot de passe"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            value={form.password.clone()}
                            oninput={on_password}
                            placeholder="Votre mot de passe"
                            required=true
                        />
                    </div>

                    <div class="form-options">
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                name="rememberMe"
                                checked={form.remember_me}
                                onchange={on_remember}
                            />
                            <span>{"Se souvenir de moi"}</span>
                        </label>
                    </div>

                    <button type="submit" class="btn btn-primary btn-full">
                        {"Se connecter"}
                    </button>
                </form>

                <div class="auth-divider">
                    <span>{"Ou"}</span>
                </div>

                <div class="auth-switch">
                    <p>
                        {"Pas encore de compte ?"}
                        <button type="button" onclick={switch_to_signup} class="switch-link">
                            {"Créer un compte"}
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

    #[test]
    fn test_reduce_updates_single_field() {
        let state = Rc::new(LoginFormData::default())
            .reduce(LoginField::Email("risk@bank.eu".to_string()))
            .reduce(LoginField::RememberMe(true))
            .reduce(LoginField::Email("alm@bank.eu".to_string()));

        assert_eq!(state.email, "alm@bank.eu");
        assert!(state.password.is_empty());
        assert!(state.remember_me);
    }

    #[test]
    fn test_serializes_remember_me_in_camel_case() {
        let json = serde_json::to_value(LoginFormData {
            remember_me: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["rememberMe"], true);
    }
}
