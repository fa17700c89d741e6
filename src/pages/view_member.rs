//! Read-only member detail view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::Member;
use crate::state::toast::Toasts;

#[component]
pub fn ViewMemberPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    let member = LocalResource::new(move || {
        let id = id();
        async move { api::fetch_member(&id).await }
    });

    Effect::new(move || {
        if let Some(Err(err)) = member.get() {
            log::warn!("member fetch failed: {err}");
            toasts.error("Failed to load member data");
        }
    });

    view! {
        <div class="view-page">
            <a class="btn btn--ghost" href="/admin/approved">
                "\u{2190} Back"
            </a>

            <Suspense fallback=move || view! { <p>"Loading member..."</p> }>
                {move || {
                    member
                        .get()
                        .map(|result| match result {
                            Ok(m) => view! { <MemberDetail member=m/> }.into_any(),
                            Err(_) => {
                                view! { <div class="view-page__error">"Member not available"</div> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn MemberDetail(member: Member) -> impl IntoView {
    let field = |label: &'static str, value: Option<String>| {
        view! {
            <div class="view-page__field">
                <span class="view-page__label">{label}</span>
                <span class="view-page__value">
                    {value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_owned())}
                </span>
            </div>
        }
    };

    let documents = [
        ("Photo", member.photo.clone()),
        ("Citizenship (front)", member.cit_front.clone()),
        ("Citizenship (back)", member.cit_back.clone()),
    ];

    view! {
        <div class="view-page__card">
            <header class="view-page__header">
                <h2>{member.full_name.clone()}</h2>
                <span class="view-page__status">{member.request_status.as_str()}</span>
            </header>

            <section class="view-page__section">
                <h3>"Personal Information"</h3>
                {field("Date of Birth", member.dob.clone())}
                {field("Gender", member.gender.clone())}
                {field("Mobile", member.mobile.clone())}
                {field("Email", Some(member.email.clone()))}
                {field("Address", member.address.clone())}
            </section>

            <section class="view-page__section">
                <h3>"Education & Skills"</h3>
                {field("Education", member.education.clone())}
                {field("College", member.college.clone())}
                {field("Status", member.status.clone())}
                {field("Skill Level", member.skill_level.clone())}
                {field("Tools", member.tools.clone())}
            </section>

            <section class="view-page__section">
                <h3>"Interests"</h3>
                <div class="view-page__chips">
                    {member
                        .interests
                        .iter()
                        .map(|i| view! { <span class="chip">{i.clone()}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="view-page__section">
                <h3>"Uploaded Documents"</h3>
                <div class="view-page__documents">
                    {documents
                        .into_iter()
                        .map(|(label, url)| {
                            let body = match url.filter(|u| !u.is_empty()) {
                                Some(url) => view! {
                                    <img class="view-page__document" src=url alt=label/>
                                }
                                    .into_any(),
                                None => view! { <p class="view-page__missing">"Not provided"</p> }
                                    .into_any(),
                            };
                            view! {
                                <div class="view-page__document-box">
                                    <h4>{label}</h4>
                                    {body}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="view-page__section">
                <h3>"Projects"</h3>
                {member
                    .projects
                    .iter()
                    .map(|p| {
                        let link = (!p.link.is_empty()).then(|| {
                            view! {
                                <a href=p.link.clone() target="_blank" rel="noopener noreferrer">
                                    "Visit Project"
                                </a>
                            }
                        });
                        view! {
                            <div class="view-page__project">
                                <h4>{p.name.clone()}</h4>
                                <p>{p.description.clone()}</p>
                                {link}
                                <div class="view-page__gallery">
                                    {p
                                        .images
                                        .iter()
                                        .map(|img| {
                                            view! {
                                                <img
                                                    class="view-page__gallery-image"
                                                    src=img.clone()
                                                    alt=p.name.clone()
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
