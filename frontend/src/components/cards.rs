use araba_asistani::{format, CarListing, CardDeck, SwipeGesture};
use leptos::ev;
use leptos::prelude::*;

/// Stack of result cards with swipe, previous/next/reset controls and a
/// progress bar.
#[component]
pub fn CarCarousel(cars: Vec<CarListing>) -> impl IntoView {
    if cars.is_empty() {
        return view! {
            <div class="cards-empty">
                <div class="cards-empty-icon">"🚗"</div>
                <p>"Araç bulunamadı"</p>
            </div>
        }
        .into_any();
    }

    let deck = RwSignal::new(CardDeck::new(cars.len()));
    let cards = cars
        .into_iter()
        .enumerate()
        .map(|(index, car)| view! { <SwipeableCarCard car=car index=index deck=deck /> })
        .collect_view();

    view! {
        <div class="card-carousel">
            <div class="card-stack">{cards}</div>

            <div class="card-nav">
                <button
                    class="nav-btn"
                    on:click=move |_| deck.update(CardDeck::previous)
                    disabled=move || !deck.with(CardDeck::can_go_previous)
                >
                    "‹"
                </button>
                <button class="reset-btn" on:click=move |_| deck.update(CardDeck::reset)>
                    "🔄 Baştan"
                </button>
                <button
                    class="nav-btn"
                    on:click=move |_| deck.update(CardDeck::next)
                    disabled=move || !deck.with(CardDeck::can_go_next)
                >
                    "›"
                </button>
            </div>

            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", deck.with(CardDeck::progress) * 100.0)
                ></div>
            </div>
        </div>
    }
    .into_any()
}

/// One card in the stack. Only the active card responds to dragging.
#[component]
fn SwipeableCarCard(car: CarListing, index: usize, deck: RwSignal<CardDeck>) -> impl IntoView {
    let gesture = RwSignal::new(SwipeGesture::new());
    let is_active = move || deck.with(|d| d.is_active(index));
    let is_dragging = move || gesture.with(SwipeGesture::is_dragging);

    let start = move |x: f64| {
        if deck.with_untracked(|d| d.is_active(index)) {
            gesture.update(|g| g.begin(x));
        }
    };
    let drag = move |x: f64| -> bool {
        if !gesture.with_untracked(SwipeGesture::is_dragging) {
            return false;
        }
        gesture.update(|g| {
            g.update(x);
        });
        true
    };
    let end = move || {
        if !gesture.with_untracked(SwipeGesture::is_dragging) {
            return;
        }
        if let Some(direction) = gesture.try_update(SwipeGesture::release).flatten() {
            deck.update(|d| d.on_swipe(direction));
        }
    };

    let headline = car.headline();
    let model = car.model().unwrap_or_default();
    let price = format::price(car.price());
    let link = car.link();

    view! {
        <div
            class="car-card"
            class:active=is_active
            class:dragging=is_dragging
            style:z-index=move || deck.with(|d| d.z_index(index)).to_string()
            style:transform=move || gesture.with(|g| g.transform().css())
            style:opacity=move || gesture.with(|g| g.transform().opacity.to_string())
            on:mousedown=move |ev: ev::MouseEvent| start(f64::from(ev.client_x()))
            on:mousemove=move |ev: ev::MouseEvent| {
                if drag(f64::from(ev.client_x())) {
                    ev.prevent_default();
                }
            }
            on:mouseup=move |_| end()
            on:mouseleave=move |_| end()
            on:touchstart=move |ev: ev::TouchEvent| {
                if let Some(touch) = ev.touches().get(0) {
                    start(f64::from(touch.client_x()));
                }
            }
            on:touchmove=move |ev: ev::TouchEvent| {
                if let Some(touch) = ev.touches().get(0) {
                    if drag(f64::from(touch.client_x())) {
                        ev.prevent_default();
                    }
                }
            }
            on:touchend=move |_| end()
        >
            <div class="car-card-body">
                <div class="car-header">
                    <h3>{headline}</h3>
                    <p class="car-model">{model}</p>
                    <div class="car-price">{price}" TL"</div>
                </div>

                <div class="car-details">
                    <Detail label="Yıl:" value=car.year() />
                    <Detail label="KM:" value=car.mileage() />
                    <Detail label="Yakıt:" value=car.fuel() />
                    <Detail label="Vites:" value=car.transmission() />
                    <Detail label="Kasa:" value=car.body_type() />
                    <Detail label="Renk:" value=car.color() />
                </div>

                {link.map(|href| {
                    view! {
                        <a class="listing-link" href=href target="_blank" rel="noopener noreferrer">
                            "İlanı Görüntüle"
                        </a>
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn Detail(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="car-detail">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{value.unwrap_or_default()}</span>
        </div>
    }
}
