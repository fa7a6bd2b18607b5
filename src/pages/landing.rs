use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    chatbot::Chatbot,
    document_card::DocumentCard,
    footer::Footer,
    service_card::ServiceCard,
    stats_counter::StatsCounter,
};
use crate::config::{DOCUMENT_STAGGER_MS, SERVICE_STAGGER_MS, STAT_STAGGER_MS};
use crate::content::{staggered, CTA_FEATURES, DOCUMENTS, HERO_HIGHLIGHTS, SERVICES, STATS};
use crate::Route;

/// The hero only gets its entrance transition once the page has mounted.
pub fn hero_class(is_visible: bool) -> Classes {
    classes!("hero", is_visible.then(|| "visible"))
}

const ARROW_ICON: &str = "→";

#[function_component(Landing)]
pub fn landing() -> Html {
    let is_visible = use_state(|| false);

    {
        let is_visible = is_visible.clone();
        use_mount(move || {
            log::debug!("Landing mounted, starting hero transition");
            is_visible.set(true);
        });
    }

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{LANDING_STYLES}</style>
            <main class="main-content">
                <section class={hero_class(*is_visible)}>
                    <div class="hero-background">
                        <div class="hero-gradient"></div>
                    </div>
                    <div class="container hero-layout">
                        <div class="hero-content">
                            <div class="hero-badge">
                                <span>{"🚀 Plateforme IA Avancée"}</span>
                            </div>
                            <h1 class="hero-title">
                                {"Intelligence Artificielle pour la"}
                                <span class="hero-highlight">{" Finance & Actuariat"}</span>
                            </h1>
                            <p class="hero-subtitle">
                                {"Solutions IA de pointe pour l'analyse de risques, la conformité réglementaire et l'optimisation actuariale. Transformez vos données en avantage compétitif."}
                            </p>

                            <div class="hero-stats">
                                {
                                    staggered(&STATS, STAT_STAGGER_MS).map(|(delay, stat)| html! {
                                        <StatsCounter
                                            key={stat.label}
                                            number={stat.number}
                                            label={stat.label}
                                            delay={delay}
                                        />
                                    }).collect::<Html>()
                                }
                            </div>

                            <div class="hero-buttons">
                                <a href="#services" class="btn btn-primary">
                                    <span>{"Découvrir nos Services"}</span>
                                    <span class="btn-arrow">{ARROW_ICON}</span>
                                </a>
                                <a href="#documents" class="btn btn-secondary">
                                    <span>{"Consulter les Documents"}</span>
                                </a>
                            </div>
                        </div>

                        <div class="hero-visual">
                            <div class="floating-cards">
                                {
                                    HERO_HIGHLIGHTS.iter().enumerate().map(|(index, card)| html! {
                                        <div key={card.label} class={format!("floating-card card-{}", index + 1)}>
                                            <div class="card-icon">{card.icon}</div>
                                            <span>{card.label}</span>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </div>
                </section>

                <section id="services" class="services-section">
                    <div class="container">
                        <div class="section-header">
                            <h2>{"Nos Domaines d'Expertise"}</h2>
                            <p class="section-subtitle">
                                {"Des solutions IA spécialisées pour chaque aspect de la finance et de l'actuariat"}
                            </p>
                        </div>
                        <div class="services-grid">
                            {
                                staggered(&SERVICES, SERVICE_STAGGER_MS).map(|(delay, service)| html! {
                                    <ServiceCard key={service.title} service={service.clone()} delay={delay} />
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </section>

                <section id="documents" class="documents-section">
                    <div class="container">
                        <div class="section-header">
                            <h2>{"Base de Connaissances Technique"}</h2>
                            <p class="section-subtitle">
                                {"Documents spécialisés analysés et enrichis par notre intelligence artificielle"}
                            </p>
                        </div>
                        <div class="documents-grid">
                            {
                                staggered(&DOCUMENTS, DOCUMENT_STAGGER_MS).map(|(delay, document)| html! {
                                    <DocumentCard key={document.title} document={document.clone()} delay={delay} />
                                }).collect::<Html>()
                            }
                        </div>
                        <div class="section-actions">
                            <a href="#documents" class="btn btn-outline">
                                <span>{"Explorer la Base Complète"}</span>
                                <span class="btn-arrow">{ARROW_ICON}</span>
                            </a>
                        </div>
                    </div>
                </section>

                <section class="cta-section">
                    <div class="cta-background">
                        <div class="cta-gradient"></div>
                    </div>
                    <div class="container">
                        <div class="cta-content">
                            <h2>{"Prêt à révolutionner votre approche financière ?"}</h2>
                            <p>
                                {"Rejoignez les leaders qui utilisent déjà notre plateforme IA pour optimiser leurs processus et prendre des décisions éclairées."}
                            </p>
                            <div class="cta-features">
                                {
                                    CTA_FEATURES.iter().map(|feature| html! {
                                        <div key={feature.label} class="feature-item">
                                            <div class="feature-icon">{feature.icon}</div>
                                            <span>{feature.label}</span>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                            <div class="cta-buttons">
                                <Link<Route> to={Route::Signup} classes="btn btn-primary btn-large">
                                    {"Démarrer une Démonstration"}
                                </Link<Route>>
                                <a href="#chatbot" class="btn btn-secondary btn-large">
                                    <span>{"Tester le Chatbot Expert"}</span>
                                </a>
                            </div>
                        </div>
                    </div>
                </section>
            </main>

            <Chatbot />
            <Footer />
        </div>
    }
}

const LANDING_STYLES: &str = r#"
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 8rem 0 4rem;
    overflow: hidden;
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.hero.visible {
    opacity: 1;
    transform: none;
}
.hero-background {
    position: absolute;
    inset: 0;
    z-index: -1;
}
.hero-gradient {
    width: 100%;
    height: 100%;
    background: radial-gradient(circle at 20% 20%, rgba(102, 126, 234, 0.25), transparent 55%),
                radial-gradient(circle at 80% 60%, rgba(118, 75, 162, 0.2), transparent 50%);
}
.hero-layout {
    display: grid;
    grid-template-columns: 1.3fr 1fr;
    gap: 3rem;
    align-items: center;
}
.hero-badge span {
    display: inline-block;
    padding: 0.4rem 1rem;
    border-radius: 999px;
    font-size: 0.85rem;
    background: rgba(102, 126, 234, 0.12);
    color: #4c51bf;
}
.hero-title {
    font-size: clamp(2.2rem, 5vw, 3.6rem);
    line-height: 1.1;
    margin: 1.25rem 0;
    color: #0f172a;
}
.hero-highlight {
    background: linear-gradient(135deg, #667eea, #764ba2);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero-subtitle {
    font-size: 1.1rem;
    color: #475569;
    max-width: 36rem;
}
.hero-stats {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
    margin: 2.5rem 0;
}
.stat-item {
    opacity: 0;
    transform: translateY(12px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.stat-item.visible {
    opacity: 1;
    transform: none;
}
.stat-number {
    font-size: 1.8rem;
    font-weight: 800;
    color: #4c51bf;
}
.stat-label {
    font-size: 0.85rem;
    color: #64748b;
}
.hero-buttons,
.cta-buttons {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}
.floating-cards {
    position: relative;
    height: 360px;
}
.floating-card {
    position: absolute;
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 1.4rem;
    border-radius: 16px;
    background: #fff;
    box-shadow: 0 20px 50px rgba(15, 23, 42, 0.12);
    animation: float 6s ease-in-out infinite;
}
.floating-card.card-1 { top: 10%; left: 10%; }
.floating-card.card-2 { top: 42%; right: 5%; animation-delay: 1.5s; }
.floating-card.card-3 { bottom: 8%; left: 20%; animation-delay: 3s; }
@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-14px); }
}
@keyframes rise {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: none; }
}
.services-section,
.documents-section {
    padding: 6rem 0;
}
.documents-section {
    background: #f8fafc;
}
.section-header {
    text-align: center;
    margin-bottom: 3rem;
}
.section-header h2 {
    font-size: 2.2rem;
    color: #0f172a;
}
.section-subtitle {
    color: #64748b;
}
.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
}
.service-card,
.document-card {
    position: relative;
    padding: 2rem 1.75rem;
    border-radius: 18px;
    background: #fff;
    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
    opacity: 0;
    animation: rise 0.7s ease forwards;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.service-card:hover,
.document-card:hover {
    transform: translateY(-6px);
    box-shadow: 0 20px 45px rgba(15, 23, 42, 0.12);
}
.service-accent {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 4px;
    border-radius: 18px 18px 0 0;
}
.service-icon,
.document-icon {
    font-size: 2rem;
}
.service-features {
    list-style: none;
    padding: 0;
    margin: 1rem 0 0;
    color: #334155;
    font-size: 0.9rem;
}
.service-features li {
    padding: 0.25rem 0;
}
.documents-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 1.5rem;
}
.document-top {
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.document-badge {
    padding: 0.25rem 0.7rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 700;
    color: #fff;
    background: linear-gradient(135deg, #f093fb, #f5576c);
}
.document-meta {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-top: 1rem;
    font-size: 0.78rem;
    color: #64748b;
}
.document-meta span {
    padding: 0.2rem 0.6rem;
    border-radius: 8px;
    background: #f1f5f9;
}
.section-actions {
    text-align: center;
    margin-top: 2.5rem;
}
.cta-section {
    position: relative;
    padding: 6rem 0;
    color: #fff;
    overflow: hidden;
}
.cta-background {
    position: absolute;
    inset: 0;
    z-index: -1;
}
.cta-gradient {
    width: 100%;
    height: 100%;
    background: linear-gradient(135deg, #1e1b4b, #4c1d95);
}
.cta-content {
    text-align: center;
    max-width: 48rem;
    margin: 0 auto;
}
.cta-content h2 {
    font-size: 2.2rem;
}
.cta-features {
    display: flex;
    justify-content: center;
    gap: 2rem;
    margin: 2rem 0;
}
.cta-buttons {
    justify-content: center;
}
.footer {
    padding: 4rem 0 2rem;
    background: #0f172a;
    color: #cbd5e1;
}
.footer-main {
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: 3rem;
}
.footer-brand h3 {
    color: #fff;
}
.social-links {
    display: flex;
    gap: 0.75rem;
    font-size: 1.3rem;
}
.social-links a {
    text-decoration: none;
}
.footer-links {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.5rem;
}
.link-group h4 {
    color: #fff;
}
.link-group a {
    display: block;
    color: #94a3b8;
    text-decoration: none;
    padding: 0.2rem 0;
    font-size: 0.9rem;
}
.footer-bottom {
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 1.5rem;
    margin-top: 3rem;
    padding-top: 2rem;
    border-top: 1px solid rgba(148, 163, 184, 0.2);
    font-size: 0.85rem;
}
.footer-meta {
    display: flex;
    flex-wrap: wrap;
    gap: 1.25rem;
}
.footer-badges {
    display: flex;
    gap: 0.5rem;
}
.footer-badges .badge {
    padding: 0.3rem 0.7rem;
    border: 1px solid rgba(148, 163, 184, 0.4);
    border-radius: 8px;
    font-size: 0.75rem;
}
@media (max-width: 900px) {
    .hero-layout,
    .footer-main {
        grid-template-columns: 1fr;
    }
    .hero-visual {
        display: none;
    }
    .hero-stats,
    .footer-links {
        grid-template-columns: repeat(2, 1fr);
    }
    .cta-features {
        flex-direction: column;
        gap: 1rem;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_hidden_before_mount() {
        assert_eq!(hero_class(false).to_string(), "hero");
    }

    #[test]
    fn test_hero_visible_after_mount() {
        assert_eq!(hero_class(true).to_string(), "hero visible");
    }
}
