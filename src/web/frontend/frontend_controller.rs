use crate::access::navigation::{NavigationEntry, entries_for_role, find_entry};
use crate::access::policy::is_role_allowed;
use crate::gym;
use crate::gym::config::GymApiConfig;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::session::Session;
use chrono::NaiveDate;
use dto::checkup_status::{CheckupStatus, compute_checkup_status};
use dto::customer_query::QueryToCreate;
use dto::member::Member;
use dto::membership_status::{MembershipStatus, compute_membership_status};
use dto::role::Role;
use reqwest::Client;
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};
use serde::Serialize;

/// A member with the statuses the tables display.
/// Both are derived on render so they can't go stale.
#[derive(Debug, Serialize, PartialEq)]
pub struct MemberRow {
    member: Member,
    membership_status: MembershipStatus,
    checkup_status: CheckupStatus,
}

fn member_row(member: Member, today: NaiveDate) -> MemberRow {
    let membership_status = compute_membership_status(member.membership_end_date(), today);
    let checkup_status = compute_checkup_status(member.next_checkup_date(), today);
    MemberRow {
        member,
        membership_status,
        checkup_status,
    }
}

fn member_rows(members: Vec<Member>) -> Vec<MemberRow> {
    let today = chrono::Utc::now().date_naive();
    members
        .into_iter()
        .map(|member| member_row(member, today))
        .collect()
}

/// A lead left through one of the public forms.
#[derive(Debug, FromForm)]
pub struct LeadForm {
    name: String,
    mobile: String,
    email: Option<String>,
    message: Option<String>,
}

impl LeadForm {
    fn into_query(self) -> QueryToCreate {
        QueryToCreate {
            name: self.name,
            mobile: self.mobile,
            email: self.email.filter(|email| !email.trim().is_empty()),
            message: self.message.filter(|message| !message.trim().is_empty()),
        }
    }
}

// region Public pages

#[get("/")]
pub async fn index() -> Template {
    Template::render(
        "index",
        context! {
            title: "Peak Pulse Gym"
        },
    )
}

#[get("/try-us")]
pub async fn try_us() -> Template {
    Template::render(
        "try-us",
        context! {
            title: "Book a free trial"
        },
    )
}

#[post("/try-us", data = "<lead>")]
pub async fn submit_try_us(
    gym_api_config: &State<GymApiConfig>,
    lead: Form<LeadForm>,
) -> Result<Template, Status> {
    submit_lead(gym_api_config, lead.into_inner(), "try-us", "Book a free trial").await
}

#[get("/contact")]
pub async fn contact() -> Template {
    Template::render(
        "contact",
        context! {
            title: "Contact us"
        },
    )
}

#[post("/contact", data = "<lead>")]
pub async fn submit_contact(
    gym_api_config: &State<GymApiConfig>,
    lead: Form<LeadForm>,
) -> Result<Template, Status> {
    submit_lead(gym_api_config, lead.into_inner(), "contact", "Contact us").await
}

async fn submit_lead(
    gym_api_config: &State<GymApiConfig>,
    lead: LeadForm,
    template: &str,
    title: &str,
) -> Result<Template, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    match gym::queries::create_query(&client, gym_api_config.host(), &lead.into_query()).await {
        Ok(_) => Ok(Template::render(
            template.to_owned(),
            context! {
                title: title,
                submitted: true
            },
        )),
        Err(error) => {
            warn!("Can't submit a lead [error: {error}]");
            Ok(Template::render(
                template.to_owned(),
                context! {
                    title: title,
                    submission_failed: true
                },
            ))
        }
    }
}

#[get("/login")]
pub async fn login() -> Template {
    Template::render(
        "login",
        context! {
            title: "Sign in"
        },
    )
}

#[get("/register")]
pub async fn register() -> Template {
    Template::render(
        "register",
        context! {
            title: "Create an account"
        },
    )
}

// endregion

// region Dashboard pages

#[get("/dashboard")]
pub async fn dashboard(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Template, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;

    let due_checkups = if wants_checkup_reminders(session.role()) {
        match gym::checkups::list_due_checkups(&client, gym_api_config.host(), session.token())
            .await
        {
            Ok(members) => Some(member_rows(members)),
            Err(error) => {
                warn!("Can't list due checkups for the dashboard [error: {error}]");
                None
            }
        }
    } else {
        None
    };

    Ok(Template::render(
        "dashboard",
        context! {
            title: "Dashboard",
            user: session.user(),
            navigation: entries_for_role(session.role()),
            due_checkups: due_checkups
        },
    ))
}

#[get("/dashboard", rank = 2)]
pub async fn dashboard_unauthenticated() -> Redirect {
    Redirect::to(uri!("/login"))
}

#[get("/members")]
pub async fn members(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Template, (Status, Template)> {
    deny_unless_allowed(&session, "/members")?;
    let client = build_backend_client(&session)?;
    let members = gym::members::list_members(&client, gym_api_config.host(), session.token())
        .await
        .map_err(|error| backend_down(&session, error))?;

    Ok(Template::render(
        "members",
        context! {
            title: "Members",
            user: session.user(),
            navigation: entries_for_role(session.role()),
            members: member_rows(members)
        },
    ))
}

#[get("/members", rank = 2)]
pub async fn members_unauthenticated() -> Redirect {
    Redirect::to(uri!("/login"))
}

#[get("/trainers")]
pub async fn trainers(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Template, (Status, Template)> {
    deny_unless_allowed(&session, "/trainers")?;
    let client = build_backend_client(&session)?;
    let trainers = gym::trainers::list_trainers(&client, gym_api_config.host(), session.token())
        .await
        .map_err(|error| backend_down(&session, error))?;

    Ok(Template::render(
        "trainers",
        context! {
            title: "Trainers",
            user: session.user(),
            navigation: entries_for_role(session.role()),
            trainers: trainers
        },
    ))
}

#[get("/trainers", rank = 2)]
pub async fn trainers_unauthenticated() -> Redirect {
    Redirect::to(uri!("/login"))
}

#[get("/plans")]
pub async fn plans(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Template, (Status, Template)> {
    deny_unless_allowed(&session, "/plans")?;
    let client = build_backend_client(&session)?;
    let plans = gym::plans::list_plans(&client, gym_api_config.host(), session.token())
        .await
        .map_err(|error| backend_down(&session, error))?;

    Ok(Template::render(
        "plans",
        context! {
            title: "Plans",
            user: session.user(),
            navigation: entries_for_role(session.role()),
            plans: plans
        },
    ))
}

#[get("/plans", rank = 2)]
pub async fn plans_unauthenticated() -> Redirect {
    Redirect::to(uri!("/login"))
}

#[get("/queries")]
pub async fn queries(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Template, (Status, Template)> {
    deny_unless_allowed(&session, "/queries")?;
    let client = build_backend_client(&session)?;
    let queries = gym::queries::list_queries(&client, gym_api_config.host(), session.token())
        .await
        .map_err(|error| backend_down(&session, error))?;

    Ok(Template::render(
        "queries",
        context! {
            title: "Customer queries",
            user: session.user(),
            navigation: entries_for_role(session.role()),
            queries: queries
        },
    ))
}

#[get("/queries", rank = 2)]
pub async fn queries_unauthenticated() -> Redirect {
    Redirect::to(uri!("/login"))
}

#[get("/workouts")]
pub async fn workouts(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Template, (Status, Template)> {
    deny_unless_allowed(&session, "/workouts")?;
    let client = build_backend_client(&session)?;
    let workouts = gym::workouts::list_workouts(&client, gym_api_config.host(), session.token())
        .await
        .map_err(|error| backend_down(&session, error))?;

    Ok(Template::render(
        "workouts",
        context! {
            title: "Workouts",
            user: session.user(),
            navigation: entries_for_role(session.role()),
            workouts: workouts
        },
    ))
}

#[get("/workouts", rank = 2)]
pub async fn workouts_unauthenticated() -> Redirect {
    Redirect::to(uri!("/login"))
}

#[get("/profile")]
pub async fn profile(session: Session) -> Template {
    Template::render(
        "profile",
        context! {
            title: "My profile",
            user: session.user(),
            navigation: entries_for_role(session.role())
        },
    )
}

#[get("/profile", rank = 2)]
pub async fn profile_unauthenticated() -> Redirect {
    Redirect::to(uri!("/login"))
}

// endregion

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            uri: req.uri()
        },
    )
}

/// Hide a section from a role it isn't meant for. This is a navigation
/// nicety, not a security boundary: the backend checks permissions again
/// on every call made from the page.
fn deny_unless_allowed(session: &Session, path: &str) -> Result<(), (Status, Template)> {
    let allowed = find_entry(path)
        .map(|entry: &NavigationEntry| is_role_allowed(session.role(), entry.allowed_roles()))
        .unwrap_or(false);
    if allowed {
        Ok(())
    } else {
        Err((
            Status::Forbidden,
            Template::render(
                "error/403",
                context! {
                    title: "Not allowed",
                    user: session.user(),
                    navigation: entries_for_role(session.role())
                },
            ),
        ))
    }
}

fn build_backend_client(session: &Session) -> Result<Client, (Status, Template)> {
    build_client().map_err(|error| {
        error!("Can't create the backend client.\n{error:#?}");
        (
            Status::InternalServerError,
            backend_error_page(session),
        )
    })
}

fn backend_down(session: &Session, error: crate::gym::error::GymApiError) -> (Status, Template) {
    warn!("Can't load page data from the gym backend [error: {error}]");
    (Status::BadGateway, backend_error_page(session))
}

fn backend_error_page(session: &Session) -> Template {
    Template::render(
        "error/backend",
        context! {
            title: "Backend unreachable",
            user: session.user(),
            navigation: entries_for_role(session.role())
        },
    )
}

/// The checkup reminder is for the desk staff who schedules checkups.
/// Trainers see the members section but never act on reminders, so the
/// backend refuses them the due list and the dashboard doesn't ask for it.
const CHECKUP_REMINDER_ROLES: &[Role] = &[Role::Admin, Role::Receptionist];

fn wants_checkup_reminders(user_role: Option<&str>) -> bool {
    is_role_allowed(user_role, CHECKUP_REMINDER_ROLES)
}
