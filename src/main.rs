pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::appointment::adapter::outgoing::AppointmentRepositoryPostgres;
use crate::modules::appointment::application::ports::incoming::use_cases::AppointmentUseCases;
use crate::modules::appointment::application::services::AppointmentService;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::modules::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::modules::auth::application::ports::incoming::use_cases::{
    FetchUserUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::services::{
    LoginUserService, RegisterUserService, UserProfileService,
};
use crate::modules::expense::adapter::outgoing::ExpenseRepositoryPostgres;
use crate::modules::expense::application::ports::incoming::use_cases::ExpenseUseCases;
use crate::modules::expense::application::services::ExpenseService;
use crate::modules::health_task::adapter::outgoing::HealthTaskRepositoryPostgres;
use crate::modules::health_task::application::ports::incoming::use_cases::HealthTaskUseCases;
use crate::modules::health_task::application::services::HealthTaskService;
use crate::modules::insights::application::ports::incoming::use_cases::GetInsightsUseCase;
use crate::modules::insights::application::services::InsightsService;
use crate::modules::report::application::ports::incoming::use_cases::GenerateReportUseCase;
use crate::modules::report::application::services::ReportService;
use crate::modules::symptom_log::adapter::outgoing::SymptomLogRepositoryPostgres;
use crate::modules::symptom_log::application::ports::incoming::use_cases::SymptomLogUseCases;
use crate::modules::symptom_log::application::services::SymptomLogService;
use crate::modules::timeline::adapter::outgoing::TimelineRepositoryPostgres;
use crate::modules::timeline::application::ports::incoming::use_cases::TimelineUseCases;
use crate::modules::timeline::application::services::TimelineService;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn RegisterUserUseCase>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase>,
    pub fetch_user_use_case: Arc<dyn FetchUserUseCase>,
    pub update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
    pub symptom_logs: SymptomLogUseCases,
    pub timeline: TimelineUseCases,
    pub appointments: AppointmentUseCases,
    pub health_tasks: HealthTaskUseCases,
    pub expenses: ExpenseUseCases,
    pub get_insights_use_case: Arc<dyn GetInsightsUseCase>,
    pub generate_report_use_case: Arc<dyn GenerateReportUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth components
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher = Arc::new(Argon2Hasher::from_env());

    let user_query = Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let user_repo = Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));

    let register_user_service = RegisterUserService::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
        Arc::new(jwt_service.clone()),
    );
    let login_user_service = LoginUserService::new(
        user_query.clone(),
        password_hasher,
        Arc::new(jwt_service.clone()),
    );
    let user_profile_service = Arc::new(UserProfileService::new(user_query.clone(), user_repo));

    // Entity repositories and services
    let symptom_log_repo = SymptomLogRepositoryPostgres::new(Arc::clone(&db_arc));
    let timeline_repo = TimelineRepositoryPostgres::new(Arc::clone(&db_arc));
    let appointment_repo = AppointmentRepositoryPostgres::new(Arc::clone(&db_arc));
    let health_task_repo = HealthTaskRepositoryPostgres::new(Arc::clone(&db_arc));
    let expense_repo = ExpenseRepositoryPostgres::new(Arc::clone(&db_arc));

    let symptom_log_service = Arc::new(SymptomLogService::new(symptom_log_repo.clone()));
    let timeline_service = Arc::new(TimelineService::new(timeline_repo.clone()));
    let appointment_service = Arc::new(AppointmentService::new(appointment_repo.clone()));
    let health_task_service = Arc::new(HealthTaskService::new(health_task_repo));
    let expense_service = Arc::new(ExpenseService::new(expense_repo));

    let insights_service = InsightsService::new(symptom_log_repo.clone());
    let report_service = ReportService::new(
        Arc::new(symptom_log_repo),
        Arc::new(timeline_repo),
        Arc::new(appointment_repo),
        user_query,
    );

    let state = AppState {
        register_user_use_case: Arc::new(register_user_service),
        login_user_use_case: Arc::new(login_user_service),
        fetch_user_use_case: user_profile_service.clone(),
        update_profile_use_case: user_profile_service,
        symptom_logs: SymptomLogUseCases {
            create: symptom_log_service.clone(),
            list: symptom_log_service.clone(),
            update: symptom_log_service.clone(),
            delete: symptom_log_service,
        },
        timeline: TimelineUseCases {
            record: timeline_service.clone(),
            list: timeline_service.clone(),
            update: timeline_service.clone(),
            delete: timeline_service,
        },
        appointments: AppointmentUseCases {
            schedule: appointment_service.clone(),
            list: appointment_service.clone(),
            upcoming: appointment_service.clone(),
            update: appointment_service.clone(),
            delete: appointment_service,
        },
        health_tasks: HealthTaskUseCases {
            add: health_task_service.clone(),
            list: health_task_service.clone(),
            update: health_task_service.clone(),
            delete: health_task_service,
        },
        expenses: ExpenseUseCases {
            record: expense_service.clone(),
            list: expense_service.clone(),
            update: expense_service.clone(),
            delete: expense_service,
        },
        get_insights_use_case: Arc::new(insights_service),
        generate_report_use_case: Arc::new(report_service),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::json_config::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::fetch_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::update_profile_handler);
    // Symptom logs
    cfg.service(
        crate::modules::symptom_log::adapter::incoming::web::routes::get_symptom_logs_handler,
    );
    cfg.service(
        crate::modules::symptom_log::adapter::incoming::web::routes::create_symptom_log_handler,
    );
    cfg.service(
        crate::modules::symptom_log::adapter::incoming::web::routes::update_symptom_log_handler,
    );
    cfg.service(
        crate::modules::symptom_log::adapter::incoming::web::routes::delete_symptom_log_handler,
    );
    // Medical timeline
    cfg.service(crate::modules::timeline::adapter::incoming::web::routes::get_timeline_handler);
    cfg.service(
        crate::modules::timeline::adapter::incoming::web::routes::create_timeline_entry_handler,
    );
    cfg.service(
        crate::modules::timeline::adapter::incoming::web::routes::update_timeline_entry_handler,
    );
    cfg.service(
        crate::modules::timeline::adapter::incoming::web::routes::delete_timeline_entry_handler,
    );
    // Appointments: the upcoming view is registered before the parameterized
    // routes so /upcoming never matches as an {id}
    cfg.service(
        crate::modules::appointment::adapter::incoming::web::routes::get_upcoming_appointments_handler,
    );
    cfg.service(crate::modules::appointment::adapter::incoming::web::routes::get_appointments_handler);
    cfg.service(
        crate::modules::appointment::adapter::incoming::web::routes::create_appointment_handler,
    );
    cfg.service(
        crate::modules::appointment::adapter::incoming::web::routes::update_appointment_handler,
    );
    cfg.service(
        crate::modules::appointment::adapter::incoming::web::routes::delete_appointment_handler,
    );
    // Health tasks
    cfg.service(
        crate::modules::health_task::adapter::incoming::web::routes::get_health_tasks_handler,
    );
    cfg.service(
        crate::modules::health_task::adapter::incoming::web::routes::create_health_task_handler,
    );
    cfg.service(
        crate::modules::health_task::adapter::incoming::web::routes::update_health_task_handler,
    );
    cfg.service(
        crate::modules::health_task::adapter::incoming::web::routes::delete_health_task_handler,
    );
    // Expenses
    cfg.service(crate::modules::expense::adapter::incoming::web::routes::get_expenses_handler);
    cfg.service(crate::modules::expense::adapter::incoming::web::routes::create_expense_handler);
    cfg.service(crate::modules::expense::adapter::incoming::web::routes::update_expense_handler);
    cfg.service(crate::modules::expense::adapter::incoming::web::routes::delete_expense_handler);
    // Insights and reports
    cfg.service(crate::modules::insights::adapter::incoming::web::routes::get_insights_handler);
    cfg.service(crate::modules::report::adapter::incoming::web::routes::generate_report_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
