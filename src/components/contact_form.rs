use crate::config::SiteConfig;
use crate::console::log_warning;
use crate::interaction::{
    ContactForm, ContactTransport, Field, SimulatedTransport, SubmissionTicket, SubmitOutcome,
};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::rc::Rc;
use std::time::Duration;

const INVALID_BORDER: &str = "#ef4444";

/// Replace whatever timer `slot` holds with a new one.
fn schedule(slot: StoredValue<Option<TimeoutHandle>>, delay: Duration, cb: impl FnOnce() + 'static) {
    match set_timeout_with_handle(cb, delay) {
        Ok(handle) => slot.update_value(|current| {
            if let Some(previous) = current.replace(handle) {
                previous.clear();
            }
        }),
        Err(_) => log_warning("Portfolio: could not schedule contact form timer"),
    }
}

fn clear(slot: StoredValue<Option<TimeoutHandle>>) {
    slot.update_value(|current| {
        if let Some(handle) = current.take() {
            handle.clear();
        }
    });
}

#[component]
pub fn ContactSection(
    /// Where validated messages go. Defaults to the in-page simulation.
    #[prop(optional)]
    transport: Option<Rc<dyn ContactTransport>>,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let submit_delay = Duration::from_millis(config.submit_delay_ms);
    let notice_delay = Duration::from_millis(config.success_notice_ms);

    let form = create_rw_signal(ContactForm::new());
    let transport = store_value(transport.unwrap_or_else(|| Rc::new(SimulatedTransport)));
    let completion_timer = store_value(None::<TimeoutHandle>);
    let notice_timer = store_value(None::<TimeoutHandle>);

    on_cleanup(move || {
        clear(completion_timer);
        clear(notice_timer);
    });

    let finish = move |ticket: SubmissionTicket| {
        let completed = form.try_update(|f| f.complete(ticket)).unwrap_or(false);
        if completed {
            schedule(notice_timer, notice_delay, move || {
                form.update(|f| {
                    f.dismiss_notice(ticket);
                });
            });
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = form.try_update(|f| f.submit()) else {
            return;
        };
        let SubmitOutcome::Accepted { ticket, payload } = outcome else {
            return;
        };
        if let Err(e) = transport.with_value(|t| t.send(&payload)) {
            log_warning(&format!("Portfolio: {e}"));
            form.update(|f| {
                f.cancel();
            });
            return;
        }
        // A newer submission supersedes any notice still on screen
        clear(notice_timer);
        schedule(completion_timer, submit_delay, move || finish(ticket));
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Get In Touch"</h2>
                <p class="contact-intro">
                    "Have a project in mind or just want to say hello? Send me a message."
                </p>
                <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
                    {Field::ALL
                        .into_iter()
                        .map(|field| view! { <FormField field=field form=form/> })
                        .collect_view()}
                    <button
                        type="submit"
                        class="btn btn-primary"
                        prop:disabled=move || form.with(|f| f.is_submitting())
                    >
                        {move || form.with(|f| f.submit_label())}
                    </button>
                    <div
                        id="formSuccess"
                        class="form-success"
                        class:show=move || form.with(|f| f.success_visible())
                    >
                        "Thank you! Your message has been sent successfully."
                    </div>
                </form>
            </div>
        </section>
    }
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let border = move || {
        if form.with(|f| f.is_marked_invalid(field)) {
            INVALID_BORDER
        } else {
            ""
        }
    };
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.input(field, value));
    };
    let on_blur = move |_: ev::FocusEvent| form.update(|f| f.blur(field));

    let control = match field {
        Field::Message => view! {
            <textarea
                id=field.input_id()
                name=field.input_id()
                rows="5"
                prop:value=value
                style:border-color=border
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_view(),
        Field::Email => view! {
            <input
                type="email"
                id=field.input_id()
                name=field.input_id()
                prop:value=value
                style:border-color=border
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_view(),
        Field::Name | Field::Subject => view! {
            <input
                type="text"
                id=field.input_id()
                name=field.input_id()
                prop:value=value
                style:border-color=border
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_view(),
    };

    view! {
        <div class="form-group">
            <label for=field.input_id()>{field.label()}</label>
            {control}
            <span class="error-message" id=field.error_id()>
                {move || form.with(|f| f.error_text(field))}
            </span>
        </div>
    }
}
