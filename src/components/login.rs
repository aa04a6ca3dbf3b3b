use crate::components::form_fields::LABEL_STYLE;
use crate::services::{LoginForm, LoginMode, LoginRequest};
use dioxus::prelude::*;
use dioxus_i18n::t;

fn tab_style(active: bool) -> &'static str {
    if active {
        "flex: 1; padding: 10px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; background: #2e7d32; color: #ffffff;"
    } else {
        "flex: 1; padding: 10px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; background: #f0f0f0; color: #333;"
    }
}

#[component]
pub fn LoginScreen(on_login: EventHandler<LoginRequest>) -> Element {
    let mut form = use_signal(LoginForm::default);

    let submit = move |_| match form.read().request() {
        Ok(request) => on_login.call(request),
        Err(e) => log::debug!("Login form not submitted: {}", e),
    };

    let mode = form.read().mode;
    let complete = form.read().is_complete();

    rsx! {
        div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 16px; background: linear-gradient(135deg, #e8f5e9, #e3f2fd);",
            div { style: "width: 100%; max-width: 440px;",

                div { style: "text-align: center; margin-bottom: 24px;",
                    div { style: "font-size: 40px;", "🌿" }
                    h1 { style: "color: #1b5e20; font-size: 28px; margin: 8px 0;", "FarmAI Insights" }
                    p { style: "color: #666; margin: 0;", {t!("login-subtitle")} }
                }

                div { class: "card",
                    div { style: "display: flex; gap: 8px; margin-bottom: 20px;",
                        button {
                            style: tab_style(mode == LoginMode::SignIn),
                            onclick: move |_| form.write().mode = LoginMode::SignIn,
                            {t!("login-tab-sign-in")}
                        }
                        button {
                            style: tab_style(mode == LoginMode::SignUp),
                            onclick: move |_| form.write().mode = LoginMode::SignUp,
                            {t!("login-tab-sign-up")}
                        }
                    }

                    h2 { style: "font-size: 18px; margin: 0 0 16px 0; color: #333;",
                        if mode == LoginMode::SignIn {
                            {t!("login-welcome")}
                        } else {
                            {t!("login-new-user")}
                        }
                    }

                    if mode == LoginMode::SignUp {
                        div { style: "margin-bottom: 16px;",
                            label { style: LABEL_STYLE, {t!("login-name")} }
                            input {
                                r#type: "text",
                                class: "input",
                                placeholder: t!("login-name-placeholder"),
                                value: "{form.read().name}",
                                oninput: move |e| form.write().name = e.value(),
                            }
                        }
                    }

                    div { style: "margin-bottom: 16px;",
                        label { style: LABEL_STYLE, {t!("login-phone")} }
                        input {
                            r#type: "tel",
                            class: "input",
                            placeholder: "+91 XXXXX XXXXX",
                            value: "{form.read().phone}",
                            oninput: move |e| form.write().phone = e.value(),
                        }
                    }

                    if mode == LoginMode::SignUp {
                        div { style: "margin-bottom: 16px;",
                            label { style: LABEL_STYLE, {t!("login-email")} }
                            input {
                                r#type: "email",
                                class: "input",
                                placeholder: "farmer@example.com",
                                value: "{form.read().email}",
                                oninput: move |e| form.write().email = e.value(),
                            }
                        }
                    }

                    div { style: "margin-bottom: 20px;",
                        label { style: LABEL_STYLE, {t!("login-password")} }
                        input {
                            r#type: "password",
                            class: "input",
                            value: "{form.read().password}",
                            oninput: move |e| form.write().password = e.value(),
                        }
                    }

                    button {
                        class: "btn-success",
                        style: "width: 100%; padding: 12px;",
                        disabled: !complete,
                        onclick: submit,
                        if mode == LoginMode::SignIn {
                            {t!("login-sign-in-button")}
                        } else {
                            {t!("login-sign-up-button")}
                        }
                        " →"
                    }
                }

                p { style: "text-align: center; color: #666; font-size: 13px; margin-top: 16px;",
                    {t!("login-tagline")}
                }
            }
        }
    }
}
