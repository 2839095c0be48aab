use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::login::LoginForm;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(LoginForm::default);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            // no navigation and no request, only the local log below
            e.prevent_default();
            let mut values = (*form).clone();
            let submission = values.submit();
            debug!("Login for {} handled locally", submission.email);
            form.set(values);
        })
    };

    html! {
        <div class="login-root">
            <style>
                {r#"
                .login-root {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    background: linear-gradient(160deg, #060b19, #13204a);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .login-card {
                    width: 100%;
                    max-width: 420px;
                    padding: 2.5rem;
                    border-radius: 18px;
                    background: rgba(14, 21, 41, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(10px);
                    color: #eef2ff;
                }
                .login-title {
                    margin: 0;
                    font-size: 1.9rem;
                    text-align: center;
                }
                .login-sub, .login-footer {
                    text-align: center;
                    color: #98a2bd;
                    font-size: 0.9rem;
                }
                .login-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.9rem;
                    margin-top: 1.5rem;
                }
                .login-form input {
                    padding: 0.8rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    background: rgba(255, 255, 255, 0.04);
                    color: inherit;
                    font-size: 1rem;
                }
                .login-form .btn-primary {
                    padding: 0.8rem;
                    border: none;
                    border-radius: 999px;
                    background: #5b8cff;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .login-footer a {
                    color: #7ea6ff;
                }
                @media (max-width: 768px) {
                    .login-card {
                        padding: 2rem;
                    }
                }
                "#}
            </style>
            <div class="login-card">
                <h1 class="login-title">{"Welcome Back"}</h1>
                <p class="login-sub">{"Sign in to continue"}</p>

                <form class="login-form" onsubmit={on_submit}>
                    <input
                        type="email"
                        placeholder="Email address"
                        value={form.email.clone()}
                        oninput={on_email}
                        required=true
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={form.password.clone()}
                        oninput={on_password}
                        required=true
                    />
                    <button type="submit" class="btn-primary">{"Login"}</button>
                </form>

                <p class="login-footer">
                    {"Don’t have an account? "}<a href="#">{"Sign up"}</a>
                </p>
            </div>
        </div>
    }
}
