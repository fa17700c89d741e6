//! Member list pages for the approval workflow.
//!
//! The pending and approved screens share one parameterized component;
//! only the badge styling and the row actions differ. Destructive row
//! actions confirm first, then call the backend and either refetch or
//! navigate.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{Member, RequestStatus};
use crate::state::toast::Toasts;
use crate::util::clipboard;
use crate::util::confirm::confirm;

#[component]
pub fn PendingMembersPage() -> impl IntoView {
    view! { <MemberListPage status=RequestStatus::Pending/> }
}

#[component]
pub fn ApprovedMembersPage() -> impl IntoView {
    view! { <MemberListPage status=RequestStatus::Approved/> }
}

#[component]
fn MemberListPage(status: RequestStatus) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    let members = LocalResource::new(move || api::fetch_members(status));

    Effect::new(move || {
        if let Some(Err(err)) = members.get() {
            log::warn!("member list fetch failed: {err}");
            toasts.error(format!("Failed to fetch {} members", status.as_str()));
        }
    });

    let on_view = Callback::new({
        let navigate = navigate.clone();
        move |id: String| {
            navigate(
                &format!("/admin/members/view/{id}"),
                NavigateOptions::default(),
            );
        }
    });

    let on_edit = Callback::new({
        let navigate = navigate.clone();
        move |id: String| {
            navigate(&format!("/admin/edit/{id}"), NavigateOptions::default());
        }
    });

    // Approve navigates to the approved list; cancel stays and refetches.
    let on_decide = Callback::new({
        let navigate = navigate.clone();
        move |(id, decision): (String, RequestStatus)| {
            let verb = match decision {
                RequestStatus::Approved => "approve",
                _ => "cancel",
            };
            if !confirm(&format!("Are you sure you want to {verb} this member?")) {
                return;
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::update_member_status(&id, decision).await {
                    Ok(()) => {
                        toasts.success(format!("Member {}", decision.as_str()));
                        if decision == RequestStatus::Approved {
                            navigate("/admin/approved", NavigateOptions::default());
                        } else {
                            members.refetch();
                        }
                    }
                    Err(err) => {
                        toasts.error(err.user_message());
                    }
                }
            });
        }
    });

    let on_delete = Callback::new(move |id: String| {
        if !confirm("Are you sure you want to delete this member?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::delete_member(&id).await {
                Ok(()) => {
                    toasts.success("Member deleted successfully");
                    members.refetch();
                }
                Err(err) => {
                    toasts.error(err.user_message());
                }
            }
        });
    });

    let on_copy_link = Callback::new(move |slug: String| {
        let url = format!("{}/cv/{slug}", clipboard::window_origin());
        leptos::task::spawn_local(async move {
            if clipboard::copy_text(&url).await {
                toasts.success("CV link copied");
            } else {
                toasts.error("Failed to copy link");
            }
        });
    });

    let title = match status {
        RequestStatus::Pending => "Pending Members",
        _ => "Approved Members",
    };
    let empty_text = match status {
        RequestStatus::Pending => "No pending members found",
        _ => "No approved members found",
    };

    view! {
        <div class="members-page">
            <header class="members-page__header">
                <div>
                    <h1 class="page-title">{title}</h1>
                    <p class="page-subtitle">"Manage and view enrollments"</p>
                </div>
                <span class="members-page__count">
                    {move || {
                        let count = members
                            .get()
                            .map(|r| r.map(|list| list.len()).unwrap_or_default())
                            .unwrap_or_default();
                        format!("{count} {}", status.as_str())
                    }}
                </span>
            </header>

            <Suspense fallback=move || view! { <p>"Loading members..."</p> }>
                {move || {
                    members
                        .get()
                        .map(|result| {
                            let list = result.unwrap_or_default();
                            if list.is_empty() {
                                view! { <div class="members-page__empty">{empty_text}</div> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="members-page__table-wrap">
                                        <table class="members-table">
                                            <thead>
                                                <tr>
                                                    <th>"S.N"</th>
                                                    <th>"Name & DOB"</th>
                                                    <th>"Contact"</th>
                                                    <th>"Education"</th>
                                                    <th>"Skills"</th>
                                                    <th>"Interests"</th>
                                                    <th>"Agreement"</th>
                                                    <th>"Status"</th>
                                                    <th>"Projects"</th>
                                                    <th>"Actions"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .enumerate()
                                                    .map(|(i, member)| {
                                                        view! {
                                                            <MemberRow
                                                                index=i + 1
                                                                member=member
                                                                status=status
                                                                on_view=on_view
                                                                on_edit=on_edit
                                                                on_decide=on_decide
                                                                on_delete=on_delete
                                                                on_copy_link=on_copy_link
                                                            />
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn MemberRow(
    index: usize,
    member: Member,
    status: RequestStatus,
    on_view: Callback<String>,
    on_edit: Callback<String>,
    on_decide: Callback<(String, RequestStatus)>,
    on_delete: Callback<String>,
    on_copy_link: Callback<String>,
) -> impl IntoView {
    let id = member.id.clone();
    let interests = if member.interests.is_empty() {
        "-".to_owned()
    } else {
        member.interests.join(", ")
    };
    let badge_class = match member.request_status {
        RequestStatus::Pending => "badge badge--pending",
        RequestStatus::Approved => "badge badge--approved",
        RequestStatus::Canceled => "badge badge--canceled",
    };

    let actions = {
        let id = id.clone();
        let cv_slug = member.cv_slug.clone();
        match status {
            RequestStatus::Pending => {
                let view_id = id.clone();
                let approve_id = id.clone();
                let cancel_id = id;
                view! {
                    <button class="btn btn--ghost" on:click=move |_| on_view.run(view_id.clone())>
                        "View"
                    </button>
                    <button
                        class="btn btn--approve"
                        on:click=move |_| on_decide.run((approve_id.clone(), RequestStatus::Approved))
                    >
                        "Approve"
                    </button>
                    <button
                        class="btn btn--cancel"
                        on:click=move |_| on_decide.run((cancel_id.clone(), RequestStatus::Canceled))
                    >
                        "Cancel"
                    </button>
                }
                .into_any()
            }
            _ => {
                let view_id = id.clone();
                let edit_id = id.clone();
                let delete_id = id;
                view! {
                    <button class="btn btn--ghost" on:click=move |_| on_view.run(view_id.clone())>
                        "View"
                    </button>
                    <button class="btn btn--ghost" on:click=move |_| on_edit.run(edit_id.clone())>
                        "Edit"
                    </button>
                    <button class="btn btn--cancel" on:click=move |_| on_delete.run(delete_id.clone())>
                        "Delete"
                    </button>
                    {cv_slug
                        .map(|slug| {
                            view! {
                                <button
                                    class="btn btn--ghost"
                                    on:click=move |_| on_copy_link.run(slug.clone())
                                >
                                    "Copy CV Link"
                                </button>
                            }
                        })}
                }
                .into_any()
            }
        }
    };

    view! {
        <tr class="members-table__row">
            <td>{index}</td>
            <td>
                <p class="members-table__name">{member.full_name.clone()}</p>
                <p class="members-table__sub">{member.dob.clone().unwrap_or_default()}</p>
            </td>
            <td>
                <p>{member.email.clone()}</p>
                <p class="members-table__sub">{member.mobile.clone().unwrap_or_default()}</p>
            </td>
            <td>
                {member.education.clone().unwrap_or_default()}
                <p class="members-table__sub">{member.college.clone().unwrap_or_default()}</p>
            </td>
            <td>
                {member.skill_level.clone().unwrap_or_default()}
                <p class="members-table__sub">
                    {member.tools.clone().unwrap_or_else(|| "-".to_owned())}
                </p>
            </td>
            <td class="members-table__interests">{interests}</td>
            <td>{if member.agreement { "Yes" } else { "No" }}</td>
            <td>
                <span class=badge_class>{member.request_status.as_str()}</span>
            </td>
            <td>
                {member
                    .projects
                    .iter()
                    .map(|p| {
                        let link = (!p.link.is_empty()).then(|| {
                            view! {
                                <a
                                    class="members-table__project-link"
                                    href=p.link.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Visit Project"
                                </a>
                            }
                        });
                        view! {
                            <div class="members-table__project">
                                <p>{p.name.clone()}</p>
                                {link}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </td>
            <td class="members-table__actions">{actions}</td>
        </tr>
    }
}
