use crate::components::{
    common::Button,
    layout::{ErrorMessage, SuccessMessage},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border placeholder-fg-muted text-fg rounded-md focus:outline-none focus:ring-action-primary-focus focus:border-action-primary-focus sm:text-sm";

#[component]
pub fn LoginForm(
    email: ReadSignal<String>,
    password: ReadSignal<String>,
    error: ReadSignal<Option<String>>,
    pending: Signal<bool>,
    #[prop(optional)] signed_out: bool,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Sign in to KidsLink"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Daycare management for families and staff"
                    </p>
                </div>
                {signed_out.then(|| view! { <SuccessMessage message="You have been signed out." /> })}
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="space-y-3">
                        <div>
                            <label for="email" class="sr-only">"Email address"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                required
                                class=INPUT_CLASS
                                placeholder="Email address"
                                prop:value=email
                                on:input=move |ev| on_email_input.call(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                required
                                class=INPUT_CLASS
                                placeholder="Password"
                                prop:value=password
                                on:input=move |ev| on_password_input.call(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}

                    <Button button_type="submit" loading=pending class="w-full">
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
