use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::content::{CERTIFICATIONS, FOOTER_LINK_GROUPS, SOCIAL_LINKS};

pub fn copyright_line(year: i32) -> String {
    format!("© {} Finance & Actuarial AI. Tous droits réservés.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-main">
                        <div class="footer-brand">
                            <h3>{config::SITE_NAME}</h3>
                            <p>{"L'intelligence artificielle au service de l'excellence financière et actuarielle"}</p>
                            <div class="social-links">
                                {
                                    SOCIAL_LINKS.iter().map(|social| html! {
                                        <a key={social.label} href="#" aria-label={social.label}>{social.icon}</a>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>

                        <div class="footer-links">
                            {
                                FOOTER_LINK_GROUPS.iter().map(|group| html! {
                                    <div key={group.title} class="link-group">
                                        <h4>{group.title}</h4>
                                        { for group.links.iter().map(|link| html! { <a href="#">{*link}</a> }) }
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="footer-bottom">
                        <div class="footer-info">
                            <p>{copyright_line(year)}</p>
                            <div class="footer-meta">
                                <span>{format!("🏢 {}", config::CONTACT_CITY)}</span>
                                <span>{format!("📧 {}", config::CONTACT_EMAIL)}</span>
                                <span>{format!("📞 {}", config::CONTACT_PHONE)}</span>
                            </div>
                        </div>
                        <div class="footer-badges">
                            { for CERTIFICATIONS.iter().map(|badge| html! { <div class="badge">{*badge}</div> }) }
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line_uses_given_year() {
        assert_eq!(
            copyright_line(2031),
            "© 2031 Finance & Actuarial AI. Tous droits réservés."
        );
    }
}
