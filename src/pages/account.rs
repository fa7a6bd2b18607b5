use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::login::{Login, LoginFormData};
use crate::auth::signup::{Signup, SignupFormData, AUTH_STYLES};
use crate::Route;

/// Log-safe JSON summary of a signup, without the password fields.
pub fn signup_summary(data: &SignupFormData) -> String {
    serde_json::to_string(&data.redacted()).unwrap_or_else(|e| {
        warn!("Could not serialize signup summary: {}", e);
        String::from("{}")
    })
}

pub fn welcome_message(first_name: &str) -> String {
    if first_name.trim().is_empty() {
        "Bienvenue !".to_string()
    } else {
        format!("Bienvenue, {} !", first_name.trim())
    }
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let navigator = use_navigator();
    let registered = use_state(|| None::<SignupFormData>);

    let on_switch_to_login = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let on_signup = {
        let registered = registered.clone();
        Callback::from(move |data: SignupFormData| {
            info!("Signup received: {}", signup_summary(&data));
            registered.set(Some(data));
        })
    };

    match &*registered {
        Some(data) => html! {
            <div class="auth-container">
                <style>{AUTH_STYLES}</style>
                <div class="auth-card">
                    <div class="auth-header">
                        <h2>{welcome_message(&data.first_name)}</h2>
                        <p>
                            {format!("Votre demande d'inscription pour {} a bien été enregistrée.", data.email)}
                        </p>
                    </div>
                    <Link<Route> to={Route::Home} classes="btn btn-primary btn-full">
                        {"Retour à l'accueil"}
                    </Link<Route>>
                </div>
            </div>
        },
        None => html! {
            <Signup on_switch_to_login={on_switch_to_login} on_signup={on_signup} />
        },
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator();

    let on_switch_to_signup = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Signup);
            }
        })
    };

    let on_login = Callback::from(move |data: LoginFormData| {
        info!("Login requested for {} (remember: {})", data.email, data.remember_me);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <Login on_switch_to_signup={on_switch_to_signup} on_login={on_login} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::signup::SignupField;

    #[test]
    fn test_summary_never_contains_password() {
        let mut data = SignupFormData::default();
        data.apply(SignupField::Email("ana@fonds.fr".to_string()));
        data.apply(SignupField::Password("abcd1234".to_string()));
        data.apply(SignupField::ConfirmPassword("abcd1234".to_string()));

        let summary = signup_summary(&data);
        assert!(summary.contains("ana@fonds.fr"));
        assert!(!summary.contains("abcd1234"));
    }

    #[test]
    fn test_welcome_message() {
        assert_eq!(welcome_message("  Ana "), "Bienvenue, Ana !");
        assert_eq!(welcome_message(""), "Bienvenue !");
    }
}
