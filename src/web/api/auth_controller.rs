use crate::gym;
use crate::gym::config::GymApiConfig;
use crate::gym::error::GymApiError::{TokenRejected, WrongCredentials};
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::api::map_gym_error;
use crate::web::authentication::{SESSION_COOKIE, session_id};
use crate::web::session::{Session, SessionStorage};
use dto::auth::{LoginRequest, RegistrationRequest};
use dto::user::User;
use rocket::State;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::serde::json::Json;
use rocket::time::Duration;
use std::sync::Mutex;
use uuid::Uuid;

const SESSION_COOKIE_MAX_AGE_DAYS: i64 = 7;

/// Try and log a user onto the gym backend.
/// If the login succeeds, the bearer token is validated right away through
/// `/auth/me`, then stored under a fresh UUID which reaches the caller as a
/// private cookie. The token itself never reaches the browser.
#[post("/auth/login", format = "application/json", data = "<credentials>")]
pub async fn login(
    gym_api_config: &State<GymApiConfig>,
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    credentials: Json<LoginRequest>,
) -> Result<Json<User>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    let host = gym_api_config.host();
    let credentials = credentials.into_inner();

    let token = match gym::auth::login(&client, host, &credentials).await {
        Ok(token) => token,
        Err(WrongCredentials) => return Err(Status::Unauthorized),
        Err(error) => return Err(map_gym_error(error)),
    };
    let user = gym::auth::current_user(&client, host, token.access_token())
        .await
        .map_err(map_gym_error)?;

    let mut session_storage = session_storage
        .lock()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let uuid = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE.to_owned(), uuid.clone()))
        .max_age(Duration::days(SESSION_COOKIE_MAX_AGE_DAYS))
        .build();
    cookie_jar.add_private(cookie);
    session_storage.store(uuid, Session::new(token.access_token().clone(), user.clone()));

    Ok(Json(user))
}

/// Proxy an account creation. No session comes out of it:
/// the backend keeps new accounts pending until an admin approves them.
#[post("/auth/register", format = "application/json", data = "<registration>")]
pub async fn register(
    gym_api_config: &State<GymApiConfig>,
    registration: Json<RegistrationRequest>,
) -> Result<Json<User>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::auth::register(&client, gym_api_config.host(), &registration.into_inner())
        .await
        .map(Json)
        .map_err(map_gym_error)
}

/// Revalidate the session against the backend and refresh the cached
/// identity. A rejected token kills the session on the spot.
#[get("/auth/me")]
pub async fn current_user(
    gym_api_config: &State<GymApiConfig>,
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    session: Session,
) -> Result<Json<User>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    match gym::auth::current_user(&client, gym_api_config.host(), session.token()).await {
        Ok(user) => {
            refresh_session(session_storage, cookie_jar, session, &user);
            Ok(Json(user))
        }
        Err(TokenRejected) => {
            clear_session(session_storage, cookie_jar);
            Err(Status::Unauthorized)
        }
        Err(error) => Err(map_gym_error(error)),
    }
}

#[post("/auth/logout")]
pub async fn logout(
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    _session: Session,
) -> Status {
    clear_session(session_storage, cookie_jar);
    Status::NoContent
}

fn refresh_session(
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    session: Session,
    user: &User,
) {
    let Some(id) = session_id(cookie_jar) else {
        return;
    };
    match session_storage.lock() {
        Ok(mut session_storage) => session_storage.store(id, session.with_user(user.clone())),
        Err(error) => error!("Can't refresh session.\n{error:#?}"),
    }
}

fn clear_session(session_storage: &State<Mutex<SessionStorage>>, cookie_jar: &CookieJar<'_>) {
    if let Some(id) = session_id(cookie_jar) {
        match session_storage.lock() {
            Ok(mut session_storage) => {
                session_storage.remove(&id);
            }
            Err(error) => error!("Can't clear session.\n{error:#?}"),
        }
    }
    cookie_jar.remove_private(Cookie::from(SESSION_COOKIE));
}
