use crate::components::imports::*;
use interfacing::Credentials;

#[styled_component]
pub fn Login() -> Html {
    let email_ref = use_node_ref();
    let senha_ref = use_node_ref();

    let onsubmit = {
        let email_ref = email_ref.clone();
        let senha_ref = senha_ref.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email = email_ref.cast::<HtmlInputElement>().unwrap().value();
            let senha = senha_ref.cast::<HtmlInputElement>().unwrap().value();

            let credentials = Credentials {
                email,
                senha: SecretString::new(senha),
            };

            wasm_bindgen_futures::spawn_local(async move {
                console::log!(format!("submitting: {:?}", credentials));

                match request_login(&credentials).await {
                    Ok(response) => {
                        if response.ok() {
                            // a non-JSON success body is unguarded, it takes down this task only
                            let payload = response.json::<serde_json::Value>().await.unwrap();
                            console::log!(success_entry(&payload));
                        } else {
                            console::error!(rejection_entry(response.status_text()));
                        }
                    }
                    Err(error) => console::error!(connection_error_entry(error)),
                }
            })
        })
    };

    html! {
        <>
            <form {onsubmit} method="post">
                <label>{ "Email" }
                    <input ref={email_ref} type="email" placeholder="Enter Email" name="email"/>
                </label>
                <label>{ "Password" }
                    <input ref={senha_ref} type="password" placeholder="Enter Password" name="senha"/>
                </label>
                <button type="submit">{ "Login" }</button>
            </form>
        </>
    }
}

async fn request_login(credentials: &Credentials) -> request::SendResult {
    Request::static_post(routes().api.login)
        .json(credentials)
        .unwrap()
        .send()
        .await
}

fn success_entry(payload: &serde_json::Value) -> String {
    format!("login succeeded: {payload}")
}

fn rejection_entry(status_text: impl AsRef<str>) -> String {
    format!("login rejected: {}", status_text.as_ref())
}

fn connection_error_entry(error: impl std::fmt::Display) -> String {
    format!("connection error: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_entry_carries_the_parsed_payload() {
        let payload: serde_json::Value = serde_json::json!({"token": "abc"});

        assert_eq!(success_entry(&payload), r#"login succeeded: {"token":"abc"}"#);
    }

    #[test]
    fn rejection_entry_references_the_status_line() {
        assert_eq!(
            rejection_entry("Unauthorized"),
            "login rejected: Unauthorized"
        );
    }

    #[test]
    fn connection_errors_get_their_own_entry() {
        let rejection = rejection_entry("Unauthorized");
        let connection = connection_error_entry("Failed to fetch");

        assert_eq!(connection, "connection error: Failed to fetch");
        assert!(rejection.starts_with("login rejected"));
        assert!(connection.starts_with("connection error"));
    }
}
