use crate::tools::log_error_and_return;
use crate::web::session::{Session, SessionStorage};
use rocket::State;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};
use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "Gym-Session";

/// If an endpoint requires an authenticated caller,
/// then its implementation should require a [Session] parameter.
/// Rocket will summon this guard to resolve the private session cookie
/// against the session storage.
/// Without a live session, the request forwards as Unauthorized.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        if let Some(cookie) = get_session_cookie(req) {
            let session_storage = try_outcome!(req.guard::<&State<Mutex<SessionStorage>>>().await);
            match session_storage.lock() {
                Ok(mut session_storage) => match session_storage.get(cookie.value()) {
                    None => Outcome::Forward(Status::Unauthorized),
                    Some(session) => Outcome::Success(session.clone()),
                },
                Err(error) => {
                    log_error_and_return(Outcome::Error((Status::InternalServerError, ())))(error)
                }
            }
        } else {
            Outcome::Forward(Status::Unauthorized)
        }
    }
}

#[cfg(not(test))]
fn get_session_cookie<'a>(req: &'a Request) -> Option<Cookie<'a>> {
    req.cookies().get_private(SESSION_COOKIE)
}

/// For tests, we have to ensure the cookie is there, pending or not. Otherwise, it doesn't work.
/// Thus, the need to hijack the normal method.
#[cfg(test)]
fn get_session_cookie<'a>(req: &'a Request) -> Option<Cookie<'a>> {
    req.cookies().get_pending(SESSION_COOKIE)
}

/// The session id, for handlers which mutate the stored session.
pub fn session_id(cookie_jar: &CookieJar<'_>) -> Option<String> {
    #[cfg(not(test))]
    let cookie = cookie_jar.get_private(SESSION_COOKIE);
    #[cfg(test)]
    let cookie = cookie_jar.get_pending(SESSION_COOKIE);

    cookie.map(|cookie| cookie.value().to_owned())
}
