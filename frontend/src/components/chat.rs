use araba_asistani::emphasis::{self, Span};
use araba_asistani::Message;
use leptos::ev;
use leptos::prelude::*;

use crate::components::cards::CarCarousel;
use crate::state::AppState;

const EXAMPLE_QUERIES: [&str; 3] = [
    "100.000 TL bütçem var, otomatik vites bir sedan arıyorum",
    "Aile için geniş ve güvenli bir araç istiyorum",
    "Şehir içi kullanım için ekonomik bir araç",
];

/// Main chat area with header, message history and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let messages = state.messages;
    let active_session = state.active_session;
    let is_loading = state.is_loading;

    view! {
        <main class="chat-area">
            <header class="chat-header">
                <h1>"Araba Asistanı"</h1>
                <p>"Size en uygun arabayı bulmanıza yardımcı oluyorum! ✨"</p>
            </header>

            <div class="messages-container">
                <Show when=move || !messages.with(Vec::is_empty) fallback=|| view! { <Welcome /> }>
                    // Keyed by session so switching sessions rebuilds the list
                    <For
                        each=move || {
                            let session = active_session.get();
                            messages
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, msg)| ((session.clone(), i), msg))
                                .collect::<Vec<_>>()
                        }
                        key=|(key, _)| key.clone()
                        let:entry
                    >
                        <MessageBubble message={entry.1} />
                    </For>
                </Show>

                <Show when=move || is_loading.get()>
                    <div class="message bot typing">
                        <span class="dot"></span>
                        <span class="dot"></span>
                        <span class="dot"></span>
                    </div>
                </Show>
            </div>

            <ChatInput />
        </main>
    }
}

/// Greeting shown before the first message.
#[component]
fn Welcome() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="wave">"👋"</div>
            <h2>"Merhaba! Size nasıl yardımcı olabilirim?"</h2>
            <p>"En uygun arabayı bulmanız için buradayım"</p>
            <div class="examples">
                <p>"Örnek sorular:"</p>
                <ul>
                    {EXAMPLE_QUERIES
                        .iter()
                        .map(|q| view! { <li>{format!("• \"{q}\"")}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// A single chat message bubble.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = if message.is_user() { "message user" } else { "message bot" };
    let cars = message.listings().to_vec();
    let count = cars.len();

    view! {
        <div class=css_class>
            <div class="message-text">
                <RichText text=message.text />
            </div>
            {(!cars.is_empty()).then(|| {
                view! {
                    <div class="results">
                        <h4>{format!("🎯 Arama Sonuçları ({count} araç bulundu)")}</h4>
                        <p class="results-hint">"💡 Kartları sola/sağa kaydırarak araçları inceleyin"</p>
                        <CarCarousel cars=cars />
                    </div>
                }
            })}
        </div>
    }
}

/// Message text with `**bold**` runs emphasized. Everything is rendered as
/// text nodes.
#[component]
fn RichText(text: String) -> impl IntoView {
    emphasis::parse(&text)
        .into_iter()
        .map(|span| match span {
            Span::Plain(text) => view! { <span>{text}</span> }.into_any(),
            Span::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        })
        .collect_view()
}

/// Chat input form with textarea and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let is_loading = state.is_loading;
    let is_sending = move || is_loading.get();

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || is_loading.get_untracked() {
            return;
        }
        set_input.set(String::new());
        state.send_message(text);
    };

    let send_clone = send.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_clone();
        }
    };

    let on_submit = move |_| {
        send();
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <textarea
                    rows="3"
                    placeholder="Mesajınızı yazın... (örn: 'Kırmızı renk, otomatik vites araba istiyorum')"
                    prop:value=input
                    on:input=move |ev| {
                        set_input.set(event_target_value(&ev));
                    }
                    on:keydown=on_keydown
                    disabled=is_sending
                />
                <button
                    class="send-btn"
                    on:click=on_submit
                    disabled=move || is_sending() || input.get().trim().is_empty()
                >
                    {move || if is_sending() { "Gönderiliyor…" } else { "Gönder" }}
                </button>
            </div>
        </div>
    }
}
