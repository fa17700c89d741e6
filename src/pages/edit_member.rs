//! Member edit form: personal fields, interests, documents, and the
//! project portfolio with image management, submitted as multipart.
//!
//! The draft lives in a local-storage signal because new uploads carry
//! `web_sys::File` handles, which are not `Send`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api;
use crate::state::edit::{DocumentKind, EditDraft, FileSlot, ImageSlot, INTEREST_OPTIONS};
use crate::state::toast::Toasts;
#[cfg(feature = "csr")]
use crate::util::files;

#[component]
pub fn EditMemberPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    let draft = RwSignal::new_local(None::<EditDraft>);
    let saving = RwSignal::new(false);
    let agreement_error = RwSignal::new(false);

    let member = LocalResource::new(move || {
        let id = id();
        async move { api::fetch_member(&id).await }
    });

    // Seed the draft once the record arrives.
    Effect::new(move || match member.get() {
        Some(Ok(m)) => draft.set(Some(EditDraft::from_member(&m))),
        Some(Err(err)) => {
            log::warn!("member fetch failed: {err}");
            toasts.error("Failed to load member data");
        }
        None => {}
    });

    // A `Callback` so the submit handler stays `Copy` for the `Show`
    // children below.
    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let Some(current) = draft.get() else {
            return;
        };
        if !current.agreement {
            agreement_error.set(true);
            return;
        }
        agreement_error.set(false);
        saving.set(true);

        let id = id();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::update_member(&id, &current).await {
                Ok(()) => {
                    toasts.success("Member updated successfully");
                    navigate("/admin/approved", NavigateOptions::default());
                }
                Err(err) => {
                    toasts.error(err.user_message());
                }
            }
            saving.set(false);
        });
    });

    view! {
        <div class="edit-page">
            <header class="edit-page__header">
                <h2>"Edit Membership"</h2>
            </header>

            <Show
                when=move || draft.with(Option::is_some)
                fallback=move || view! { <p class="edit-page__loading">"Loading..."</p> }
            >
                <form class="edit-form" on:submit=move |ev| on_submit.run(ev)>
                    <PersonalSection draft=draft/>
                    <InterestsSection draft=draft/>
                    <DocumentsSection draft=draft/>
                    <ProjectsSection draft=draft/>

                    <section class="edit-form__section">
                        <label class="edit-form__agreement">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    draft.with(|d| d.as_ref().is_some_and(|d| d.agreement))
                                }
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    draft.update(|d| {
                                        if let Some(d) = d.as_mut() {
                                            d.agreement = checked;
                                        }
                                    });
                                    if checked {
                                        agreement_error.set(false);
                                    }
                                }
                            />
                            "Member agrees to the terms of enrollment"
                        </label>
                        <Show when=move || agreement_error.get()>
                            <p class="edit-form__error">"Agreement is required before saving"</p>
                        </Show>
                    </section>

                    <button
                        type="submit"
                        class="btn btn--primary edit-form__submit"
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}

type Draft = RwSignal<Option<EditDraft>, LocalStorage>;

/// Text input bound to one draft field through accessor fn pointers.
#[component]
fn DraftField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    draft: Draft,
    get: fn(&EditDraft) -> String,
    set: fn(&mut EditDraft, String),
) -> impl IntoView {
    view! {
        <label class="edit-form__field">
            {label}
            <input
                type=input_type
                prop:value=move || draft.with(|d| d.as_ref().map(get).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| {
                        if let Some(d) = d.as_mut() {
                            set(d, value);
                        }
                    });
                }
            />
        </label>
    }
}

#[component]
fn PersonalSection(draft: Draft) -> impl IntoView {
    view! {
        <section class="edit-form__section">
            <h3>"Personal Information"</h3>
            <div class="edit-form__grid">
                <DraftField
                    label="Full Name"
                    draft=draft
                    get=|d| d.full_name.clone()
                    set=|d, v| d.full_name = v
                />
                <DraftField
                    label="Date of Birth"
                    input_type="date"
                    draft=draft
                    get=|d| d.dob.clone()
                    set=|d, v| d.dob = v
                />
                <DraftField
                    label="Gender"
                    draft=draft
                    get=|d| d.gender.clone()
                    set=|d, v| d.gender = v
                />
                <DraftField
                    label="Mobile"
                    draft=draft
                    get=|d| d.mobile.clone()
                    set=|d, v| d.mobile = v
                />
                <DraftField
                    label="Email"
                    input_type="email"
                    draft=draft
                    get=|d| d.email.clone()
                    set=|d, v| d.email = v
                />
                <DraftField
                    label="Address"
                    draft=draft
                    get=|d| d.address.clone()
                    set=|d, v| d.address = v
                />
                <DraftField
                    label="Education"
                    draft=draft
                    get=|d| d.education.clone()
                    set=|d, v| d.education = v
                />
                <DraftField
                    label="College"
                    draft=draft
                    get=|d| d.college.clone()
                    set=|d, v| d.college = v
                />
                <DraftField
                    label="Status"
                    draft=draft
                    get=|d| d.status.clone()
                    set=|d, v| d.status = v
                />
                <DraftField
                    label="Skill Level"
                    draft=draft
                    get=|d| d.skill_level.clone()
                    set=|d, v| d.skill_level = v
                />
                <DraftField
                    label="Tools"
                    draft=draft
                    get=|d| d.tools.clone()
                    set=|d, v| d.tools = v
                />
            </div>
        </section>
    }
}

#[component]
fn InterestsSection(draft: Draft) -> impl IntoView {
    view! {
        <section class="edit-form__section">
            <h3>"IT Skills & Interests"</h3>
            <div class="edit-form__checkboxes">
                {INTEREST_OPTIONS
                    .into_iter()
                    .map(|interest| {
                        view! {
                            <label class="edit-form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        draft.with(|d| {
                                            d.as_ref()
                                                .is_some_and(|d| {
                                                    d.interests.iter().any(|i| i == interest)
                                                })
                                        })
                                    }
                                    on:change=move |_| {
                                        draft.update(|d| {
                                            if let Some(d) = d.as_mut() {
                                                d.toggle_interest(interest);
                                            }
                                        });
                                    }
                                />
                                {interest}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="edit-form__custom-interest">
                <input
                    type="text"
                    placeholder="Other interests, comma separated"
                    prop:value=move || {
                        draft.with(|d| {
                            d.as_ref().map(|d| d.custom_interest.clone()).unwrap_or_default()
                        })
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Some(d) = d.as_mut() {
                                d.custom_interest = value;
                            }
                        });
                    }
                />
                <button
                    type="button"
                    class="btn btn--ghost"
                    on:click=move |_| {
                        draft.update(|d| {
                            if let Some(d) = d.as_mut() {
                                d.merge_custom_interests();
                            }
                        });
                    }
                >
                    "Add"
                </button>
            </div>

            <div class="edit-form__chips">
                {move || {
                    draft
                        .with(|d| d.as_ref().map(|d| d.interests.clone()).unwrap_or_default())
                        .into_iter()
                        .map(|interest| view! { <span class="chip">{interest}</span> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

#[component]
fn DocumentsSection(draft: Draft) -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    let documents = [
        ("Photo", DocumentKind::Photo),
        ("Citizenship (front)", DocumentKind::CitizenshipFront),
        ("Citizenship (back)", DocumentKind::CitizenshipBack),
    ];

    view! {
        <section class="edit-form__section">
            <h3>"Documents"</h3>
            <div class="edit-form__documents">
                {documents
                    .into_iter()
                    .map(|(label, kind)| {
                        let preview = move || {
                            draft.with(|d| {
                                d.as_ref().and_then(|d| {
                                    let slot: &FileSlot = match kind {
                                        DocumentKind::Photo => &d.photo,
                                        DocumentKind::CitizenshipFront => &d.cit_front,
                                        DocumentKind::CitizenshipBack => &d.cit_back,
                                    };
                                    slot.preview().map(ToOwned::to_owned)
                                })
                            })
                        };
                        let on_change = move |ev: leptos::ev::Event| {
                            #[cfg(feature = "csr")]
                            {
                                let Some(input) = files::input_from_event(&ev) else {
                                    return;
                                };
                                let Some(file) = files::uploads_from_input(&input).pop() else {
                                    return;
                                };
                                let accepted = draft
                                    .try_update(|d| {
                                        d.as_mut().map(|d| d.set_document(kind, file))
                                    })
                                    .flatten()
                                    .unwrap_or(false);
                                if !accepted {
                                    toasts.error("File size must be less than 1MB");
                                }
                            }
                            #[cfg(not(feature = "csr"))]
                            {
                                let _ = ev;
                                let _ = &toasts;
                            }
                        };
                        view! {
                            <div class="edit-form__document">
                                <span class="edit-form__document-label">{label}</span>
                                {move || {
                                    preview()
                                        .map(|url| {
                                            view! {
                                                <img
                                                    class="edit-form__document-preview"
                                                    src=url
                                                    alt=label
                                                />
                                            }
                                        })
                                }}
                                <input type="file" accept="image/*" on:change=on_change/>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(draft: Draft) -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    let project_count =
        move || draft.with(|d| d.as_ref().map(|d| d.projects.len()).unwrap_or_default());

    view! {
        <section class="edit-form__section">
            <h3>"Projects"</h3>
            {move || {
                (0..project_count())
                    .map(|index| {
                        view! { <ProjectEditor draft=draft index=index toasts=toasts/> }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                type="button"
                class="btn btn--ghost"
                on:click=move |_| {
                    draft.update(|d| {
                        if let Some(d) = d.as_mut() {
                            d.add_project();
                        }
                    });
                }
            >
                "+ Add Project"
            </button>
        </section>
    }
}

#[component]
fn ProjectEditor(draft: Draft, index: usize, toasts: Toasts) -> impl IntoView {
    let with_project = move |field: fn(&crate::state::edit::ProjectDraft) -> String| {
        draft.with(|d| {
            d.as_ref()
                .and_then(|d| d.projects.get(index).map(field))
                .unwrap_or_default()
        })
    };
    let update_project = move |apply: &dyn Fn(&mut crate::state::edit::ProjectDraft)| {
        draft.update(|d| {
            if let Some(p) = d.as_mut().and_then(|d| d.projects.get_mut(index)) {
                apply(p);
            }
        });
    };

    let image_count = move || {
        draft.with(|d| {
            d.as_ref()
                .and_then(|d| d.projects.get(index))
                .map(|p| p.images.len())
                .unwrap_or_default()
        })
    };

    let on_images = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = files::input_from_event(&ev) else {
                return;
            };
            let uploads = files::uploads_from_input(&input);
            if uploads.is_empty() {
                return;
            }
            let rejected = draft
                .try_update(|d| {
                    d.as_mut()
                        .map(|d| d.add_project_images(index, uploads))
                        .unwrap_or_default()
                })
                .unwrap_or_default();
            if rejected > 0 {
                toasts.error("File size must be less than 1MB");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
            let _ = &toasts;
        }
    };

    view! {
        <div class="project-editor">
            <div class="project-editor__fields">
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || with_project(|p| p.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_project(&|p| p.name.clone_from(&value));
                        }
                    />
                </label>
                <label>
                    "Link"
                    <input
                        type="url"
                        prop:value=move || with_project(|p| p.link.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_project(&|p| p.link.clone_from(&value));
                        }
                    />
                </label>
                <label>
                    "Description"
                    <input
                        type="text"
                        prop:value=move || with_project(|p| p.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_project(&|p| p.description.clone_from(&value));
                        }
                    />
                </label>
            </div>

            <div class="project-editor__images">
                {move || {
                    (0..image_count())
                        .map(|img_index| {
                            let preview = move || {
                                draft.with(|d| {
                                    d.as_ref()
                                        .and_then(|d| d.projects.get(index))
                                        .and_then(|p| p.images.get(img_index))
                                        .and_then(ImageSlot::preview)
                                        .map(ToOwned::to_owned)
                                })
                            };
                            view! {
                                <div class="project-editor__image">
                                    {move || {
                                        preview()
                                            .map(|url| {
                                                view! {
                                                    <img
                                                        class="project-editor__thumb"
                                                        src=url
                                                        alt="project image"
                                                    />
                                                }
                                            })
                                    }}
                                    <div class="project-editor__image-actions">
                                        <button
                                            type="button"
                                            class="btn btn--tiny"
                                            title="Move left"
                                            on:click=move |_| {
                                                draft.update(|d| {
                                                    if let Some(d) = d.as_mut() {
                                                        d.move_project_image(index, img_index, false);
                                                    }
                                                });
                                            }
                                        >
                                            "\u{2190}"
                                        </button>
                                        <button
                                            type="button"
                                            class="btn btn--tiny"
                                            title="Move right"
                                            on:click=move |_| {
                                                draft.update(|d| {
                                                    if let Some(d) = d.as_mut() {
                                                        d.move_project_image(index, img_index, true);
                                                    }
                                                });
                                            }
                                        >
                                            "\u{2192}"
                                        </button>
                                        <button
                                            type="button"
                                            class="btn btn--tiny"
                                            title="Remove"
                                            on:click=move |_| {
                                                draft.update(|d| {
                                                    if let Some(d) = d.as_mut() {
                                                        d.remove_project_image(index, img_index);
                                                    }
                                                });
                                            }
                                        >
                                            "\u{d7}"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="project-editor__actions">
                <input type="file" accept="image/*" multiple on:change=on_images/>
                <button
                    type="button"
                    class="btn btn--cancel"
                    on:click=move |_| {
                        draft.update(|d| {
                            if let Some(d) = d.as_mut() {
                                d.remove_project(index);
                            }
                        });
                    }
                >
                    "Remove Project"
                </button>
            </div>
        </div>
    }
}
