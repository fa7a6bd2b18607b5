use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

const ACTUARIAT_ANSWER: &str = "L'ACTUARIAT - Science des Risques et Assurances

L'actuariat applique des méthodes mathématiques et statistiques pour évaluer les risques financiers dans l'assurance, la finance et la prévoyance sociale.

Domaines principaux :
• Assurance Vie : calcul des primes, réserves mathématiques, tables de mortalité
• Assurance Dommages : tarification IARD, provisionnement des sinistres
• Régimes de Retraite : gestion des pensions, financement
• Risk Management : Solvabilité II, capital économique, stress testing";

const BALE_ANSWER: &str = "RÉGULATION BÂLE III/IV

Bâle III renforce les exigences de capital après la crise de 2008 :
• Ratio CET1 minimum : 4.5% + 2.5% buffer = 7%
• Ratio de levier : 3% minimum
• Liquidité : LCR (100%) et NSFR (100%)

Bâle IV (finalisation de Bâle III) :
• Sortie des approches standardisées
• Restrictions sur les modèles internes
• Meilleure comparabilité internationale";

const IFRS_ANSWER: &str = "IFRS 17 - Contrats d'Assurance

Nouvelle norme comptable internationale pour les contrats d'assurance :
• Modèle de mesure unique (VFA, PAA, BBA)
• Reconnaissance des profits sur la durée du contrat
• Meilleure comparabilité internationale
• Transparence accrue sur la performance";

const GREETING: &str =
    "Bonjour ! Je suis votre assistant expert en finance et actuariat. Posez-moi une question sur Bâle, IFRS 17 ou l'actuariat.";

/// Checked in order; the first keyword found in the question wins.
const KEYWORD_ANSWERS: [(&str, &str); 3] = [
    ("actuariat", ACTUARIAT_ANSWER),
    ("bâle", BALE_ANSWER),
    ("ifrs", IFRS_ANSWER),
];

/// Answers a question from the built-in knowledge snippets.
pub fn respond(question: &str) -> String {
    let lowered = question.to_lowercase();
    for (keyword, answer) in KEYWORD_ANSWERS {
        if lowered.contains(keyword) {
            return answer.to_string();
        }
    }

    format!(
        "Assistant Expert Finance & Actuariat

Votre question : \"{}\"

Domaines couverts :
- Risk Management & Régulation Bâle
- Actuariat & Assurances (vie, non-vie, santé)
- Finance Quantitative & Produits Dérivés
- Normes IFRS 17 & Comptabilité
- Modélisation Financière & ALM",
        question
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

pub enum ChatbotMsg {
    Toggle,
    SetDraft(String),
    Send,
    Reply(String),
}

pub struct Chatbot {
    expanded: bool,
    draft: String,
    messages: Vec<ChatMessage>,
    typing: bool,
    pending_reply: Option<Timeout>,
}

impl Chatbot {
    /// Moves the trimmed draft into the history. Returns the question, or
    /// `None` when there was nothing to send.
    fn take_draft(&mut self) -> Option<String> {
        let question = self.draft.trim().to_string();
        if question.is_empty() {
            return None;
        }
        self.draft.clear();
        self.messages.push(ChatMessage {
            author: Author::User,
            text: question.clone(),
        });
        Some(question)
    }

    fn render_message(message: &ChatMessage) -> Html {
        let class = match message.author {
            Author::User => "chat-message user",
            Author::Assistant => "chat-message assistant",
        };
        html! {
            <div class={class}>
                { for message.text.lines().map(|line| html! { <p>{line.to_string()}</p> }) }
            </div>
        }
    }
}

impl Component for Chatbot {
    type Message = ChatbotMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            expanded: false,
            draft: String::new(),
            messages: vec![ChatMessage {
                author: Author::Assistant,
                text: GREETING.to_string(),
            }],
            typing: false,
            pending_reply: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatbotMsg::Toggle => {
                self.expanded = !self.expanded;
                true
            }
            ChatbotMsg::SetDraft(draft) => {
                self.draft = draft;
                true
            }
            ChatbotMsg::Send => {
                if self.typing {
                    return false;
                }
                let Some(question) = self.take_draft() else {
                    return false;
                };
                log!("Chatbot question:", question.clone());

                let answer = respond(&question);
                let link = ctx.link().clone();
                self.typing = true;
                self.pending_reply = Some(Timeout::new(config::CHATBOT_REPLY_DELAY_MS, move || {
                    link.send_message(ChatbotMsg::Reply(answer));
                }));
                true
            }
            ChatbotMsg::Reply(answer) => {
                self.typing = false;
                self.pending_reply = None;
                self.messages.push(ChatMessage {
                    author: Author::Assistant,
                    text: answer,
                });
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatbotMsg::Toggle);
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatbotMsg::Send
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatbotMsg::SetDraft(input.value())
        });

        html! {
            <div id="chatbot" class={classes!("chatbot-widget", self.expanded.then(|| "expanded"))}>
                <style>
                {r#".chatbot-widget {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 200;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                        gap: 0.75rem;
                    }
                    .chatbot-toggle {
                        width: 60px;
                        height: 60px;
                        border-radius: 50%;
                        border: none;
                        font-size: 1.6rem;
                        color: #fff;
                        cursor: pointer;
                        background: linear-gradient(135deg, #667eea, #764ba2);
                        box-shadow: 0 10px 30px rgba(102, 126, 234, 0.4);
                    }
                    .chatbot-panel {
                        width: min(380px, calc(100vw - 3rem));
                        height: 480px;
                        display: flex;
                        flex-direction: column;
                        background: #fff;
                        border-radius: 18px;
                        overflow: hidden;
                        box-shadow: 0 20px 60px rgba(15, 23, 42, 0.2);
                    }
                    .chatbot-header {
                        padding: 1rem 1.25rem;
                        color: #fff;
                        background: linear-gradient(135deg, #667eea, #764ba2);
                    }
                    .chatbot-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                    }
                    .chat-message {
                        max-width: 85%;
                        padding: 0.6rem 0.9rem;
                        border-radius: 14px;
                        font-size: 0.88rem;
                        line-height: 1.45;
                    }
                    .chat-message p {
                        margin: 0;
                        min-height: 0.6em;
                    }
                    .chat-message.user {
                        align-self: flex-end;
                        color: #fff;
                        background: #667eea;
                    }
                    .chat-message.assistant {
                        align-self: flex-start;
                        background: #f1f5f9;
                        color: #1e293b;
                    }
                    .chat-typing {
                        font-size: 0.8rem;
                        color: #94a3b8;
                    }
                    .chatbot-input {
                        display: flex;
                        border-top: 1px solid #e2e8f0;
                    }
                    .chatbot-input input {
                        flex: 1;
                        border: none;
                        padding: 0.9rem 1rem;
                        font-size: 0.9rem;
                    }
                    .chatbot-input input:focus {
                        outline: none;
                    }
                    .chatbot-input button {
                        border: none;
                        padding: 0 1.2rem;
                        color: #667eea;
                        font-weight: 700;
                        background: none;
                        cursor: pointer;
                    }"#}
                </style>
                if self.expanded {
                    <div class="chatbot-panel">
                        <div class="chatbot-header">
                            <strong>{"Chatbot Expert"}</strong>
                            <div>{"Finance & Actuariat · 24/7"}</div>
                        </div>
                        <div class="chatbot-messages">
                            { for self.messages.iter().map(Self::render_message) }
                            if self.typing {
                                <div class="chat-typing">{"L'assistant rédige une réponse..."}</div>
                            }
                        </div>
                        <form class="chatbot-input" onsubmit={onsubmit}>
                            <input
                                type="text"
                                placeholder="Posez votre question..."
                                value={self.draft.clone()}
                                oninput={oninput}
                            />
                            <button type="submit" disabled={self.typing}>{"Envoyer"}</button>
                        </form>
                    </div>
                }
                <button class="chatbot-toggle" onclick={toggle} aria-label="Chatbot">
                    if self.expanded {
                        {"✕"}
                    } else {
                        {"💬"}
                    }
                </button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Chatbot {
        Chatbot {
            expanded: true,
            draft: String::new(),
            messages: Vec::new(),
            typing: false,
            pending_reply: None,
        }
    }

    #[test]
    fn test_respond_matches_keywords_case_insensitively() {
        assert_eq!(respond("C'est quoi l'ACTUARIAT ?"), ACTUARIAT_ANSWER);
        assert_eq!(respond("Les ratios de Bâle III"), BALE_ANSWER);
        assert_eq!(respond("Impact d'IFRS 17 sur le bilan"), IFRS_ANSWER);
    }

    #[test]
    fn test_respond_prefers_first_keyword() {
        assert_eq!(respond("ifrs et actuariat"), ACTUARIAT_ANSWER);
    }

    #[test]
    fn test_respond_falls_back_with_question() {
        let answer = respond("Comment calculer la VaR ?");
        assert!(answer.contains("\"Comment calculer la VaR ?\""));
        assert!(answer.contains("Modélisation Financière & ALM"));
    }

    #[test]
    fn test_blank_draft_is_not_sent() {
        let mut chatbot = widget();
        chatbot.draft = "   ".to_string();
        assert_eq!(chatbot.take_draft(), None);
        assert!(chatbot.messages.is_empty());
    }

    #[test]
    fn test_draft_is_trimmed_and_cleared() {
        let mut chatbot = widget();
        chatbot.draft = "  IFRS 17 ?  ".to_string();
        assert_eq!(chatbot.take_draft(), Some("IFRS 17 ?".to_string()));
        assert!(chatbot.draft.is_empty());
        assert_eq!(
            chatbot.messages,
            vec![ChatMessage { author: Author::User, text: "IFRS 17 ?".to_string() }]
        );
    }
}
