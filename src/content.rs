//! Static marketing content rendered by the landing page.
//!
//! Everything here is immutable and rebuilt on every render pass; cards only
//! borrow from these tables.

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// CSS background value used for the card accent.
    pub gradient: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentMeta {
    pub kind: &'static str,
    pub pages: &'static str,
    pub category: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub meta: DocumentMeta,
    pub badge: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "🎯",
        title: "Risk Management",
        description: "Analyse et modélisation des risques financiers avec IA avancée",
        features: &["Bâle III/IV Compliance", "Value at Risk (VaR)", "Stress Testing", "Capital Allocation"],
        gradient: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    },
    Service {
        icon: "📋",
        title: "Conformité Réglementaire",
        description: "Surveillance complète des régulations financières internationales",
        features: &["IFRS 17 Implementation", "Solvability II Reporting", "Regulatory Monitoring", "Audit Automation"],
        gradient: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    },
    Service {
        icon: "📊",
        title: "Analyse Actuarielle",
        description: "Modélisation actuarielle précise et calcul de réserves optimisés",
        features: &["Pricing & Reserving", "Mortality Modeling", "Pension Valuation", "ALM Strategies"],
        gradient: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    },
    Service {
        icon: "🤖",
        title: "Chatbot Expert",
        description: "Assistant IA spécialisé disponible 24/7 pour vos questions techniques",
        features: &["24/7 Availability", "Technical Expertise", "Multi-language", "RAG Powered"],
        gradient: "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    },
];

pub const DOCUMENTS: [Document; 3] = [
    Document {
        icon: "📄",
        title: "Bâle III/IV Framework",
        description: "Analyse exhaustive des exigences de capital renforcées et des nouveaux ratios de liquidité",
        meta: DocumentMeta { kind: "AI Generated", pages: "45 pages", category: "Régulation" },
        badge: Some("Nouveau"),
    },
    Document {
        icon: "📊",
        title: "IFRS 17 Implementation",
        description: "Guide pratique de mise en œuvre avec études de cas et modèles financiers",
        meta: DocumentMeta { kind: "AI Enhanced", pages: "32 pages", category: "Comptabilité" },
        badge: Some("Populaire"),
    },
    Document {
        icon: "🎯",
        title: "Risk Management Strategies",
        description: "Stratégies avancées de gestion des risques financiers et opérationnels",
        meta: DocumentMeta { kind: "Expert Analysis", pages: "28 pages", category: "Risk Management" },
        badge: None,
    },
];

pub const STATS: [Stat; 4] = [
    Stat { number: "250+", label: "Documents Analysés" },
    Stat { number: "15+", label: "Domaines Experts" },
    Stat { number: "99.7%", label: "Précision IA" },
    Stat { number: "24/7", label: "Disponibilité" },
];

pub const HERO_HIGHLIGHTS: [Highlight; 3] = [
    Highlight { icon: "📈", label: "Risk Analysis" },
    Highlight { icon: "🔒", label: "Compliance" },
    Highlight { icon: "💰", label: "Valuation" },
];

pub const CTA_FEATURES: [Highlight; 3] = [
    Highlight { icon: "⚡", label: "Déploiement en 24h" },
    Highlight { icon: "🛡️", label: "Certifié RGPD" },
    Highlight { icon: "🎯", label: "Sur-mesure" },
];

pub const SOCIAL_LINKS: [Highlight; 3] = [
    Highlight { icon: "💼", label: "LinkedIn" },
    Highlight { icon: "🐦", label: "Twitter" },
    Highlight { icon: "🔗", label: "GitHub" },
];

pub const FOOTER_LINK_GROUPS: [LinkGroup; 4] = [
    LinkGroup {
        title: "Solutions",
        links: &["Risk Management", "Compliance", "Actuarial Analysis", "Chatbot Expert"],
    },
    LinkGroup {
        title: "Ressources",
        links: &["Documentation", "Cas d'Usage", "Blog Technique", "API"],
    },
    LinkGroup {
        title: "Entreprise",
        links: &["À propos", "Carrières", "Contact", "Presse"],
    },
    LinkGroup {
        title: "Légal",
        links: &["Confidentialité", "Conditions", "Cookies", "Sécurité"],
    },
];

pub const CERTIFICATIONS: [&str; 3] = ["ISO 27001", "RGPD Compliant", "SOC 2 Type II"];

/// Reveal delay for the item at `index` when items appear `step_ms` apart.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Pairs each item with its reveal delay.
pub fn staggered<T>(items: &[T], step_ms: u32) -> impl Iterator<Item = (u32, &T)> {
    items
        .iter()
        .enumerate()
        .map(move |(index, item)| (stagger(index, step_ms), item))
}

/// Inline style that holds back a card's entrance animation.
pub fn reveal_style(delay_ms: u32) -> String {
    format!("animation-delay: {}ms;", delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DOCUMENT_STAGGER_MS, SERVICE_STAGGER_MS, STAT_STAGGER_MS};

    #[test]
    fn test_stats_are_revealed_200ms_apart() {
        let delays: Vec<u32> = staggered(&STATS, STAT_STAGGER_MS).map(|(d, _)| d).collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
    }

    #[test]
    fn test_service_and_document_delays() {
        let services: Vec<u32> = staggered(&SERVICES, SERVICE_STAGGER_MS).map(|(d, _)| d).collect();
        let documents: Vec<u32> = staggered(&DOCUMENTS, DOCUMENT_STAGGER_MS).map(|(d, _)| d).collect();
        assert_eq!(services, vec![0, 100, 200, 300]);
        assert_eq!(documents, vec![0, 150, 300]);
    }

    #[test]
    fn test_stagger_saturates_instead_of_overflowing() {
        assert_eq!(stagger(usize::MAX, 150), u32::MAX);
    }

    #[test]
    fn test_reveal_style() {
        assert_eq!(reveal_style(300), "animation-delay: 300ms;");
    }

    #[test]
    fn test_staggered_keeps_item_order() {
        let titles: Vec<&str> = staggered(&SERVICES, SERVICE_STAGGER_MS)
            .map(|(_, s)| s.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Risk Management", "Conformité Réglementaire", "Analyse Actuarielle", "Chatbot Expert"]
        );
    }

    #[test]
    fn test_only_last_document_has_no_badge() {
        let badges: Vec<Option<&str>> = DOCUMENTS.iter().map(|d| d.badge).collect();
        assert_eq!(badges, vec![Some("Nouveau"), Some("Populaire"), None]);
    }

    #[test]
    fn test_every_service_lists_four_features() {
        for service in SERVICES.iter() {
            assert_eq!(service.features.len(), 4, "{}", service.title);
        }
    }
}
