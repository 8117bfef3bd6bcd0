use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::appointment::application::ports::incoming::use_cases::{
    AmendAppointmentCommand, DeleteAppointmentError, DeleteAppointmentUseCase,
    ListAppointmentsError, ListAppointmentsUseCase, ScheduleAppointmentCommand,
    ScheduleAppointmentError, ScheduleAppointmentUseCase, UpcomingAppointmentsUseCase,
    UpdateAppointmentError, UpdateAppointmentUseCase,
};
use crate::modules::appointment::application::ports::outgoing::AppointmentResult;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthSession, FetchUserError, FetchUserUseCase, LoginError, LoginUserCommand, LoginUserUseCase,
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, UpdateProfileCommand,
    UpdateProfileError, UpdateProfileUseCase, UserProfile,
};
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::modules::expense::application::ports::incoming::use_cases::{
    AmendExpenseCommand, DeleteExpenseError, DeleteExpenseUseCase, ListExpensesError,
    ListExpensesUseCase, RecordExpenseCommand, RecordExpenseError, RecordExpenseUseCase,
    UpdateExpenseError, UpdateExpenseUseCase,
};
use crate::modules::expense::application::ports::outgoing::ExpenseResult;
use crate::modules::health_task::application::ports::incoming::use_cases::{
    AddHealthTaskCommand, AddHealthTaskError, AddHealthTaskUseCase, AmendHealthTaskCommand,
    DeleteHealthTaskError, DeleteHealthTaskUseCase, ListHealthTasksError, ListHealthTasksUseCase,
    UpdateHealthTaskError, UpdateHealthTaskUseCase,
};
use crate::modules::health_task::application::ports::outgoing::HealthTaskResult;
use crate::modules::insights::application::domain::summary::SymptomSummary;
use crate::modules::insights::application::ports::incoming::use_cases::{
    GetInsightsError, GetInsightsUseCase,
};
use crate::modules::report::application::ports::incoming::use_cases::{
    BuildReportCommand, GenerateReportError, GenerateReportUseCase, HealthReport,
};
use crate::modules::symptom_log::application::ports::incoming::use_cases::{
    AmendSymptomLogCommand, CreateSymptomLogError, CreateSymptomLogUseCase, DeleteSymptomLogError,
    DeleteSymptomLogUseCase, ListSymptomLogsError, ListSymptomLogsUseCase, LogSymptomsCommand,
    UpdateSymptomLogError, UpdateSymptomLogUseCase,
};
use crate::modules::symptom_log::application::ports::outgoing::SymptomLogResult;
use crate::modules::timeline::application::ports::incoming::use_cases::{
    AmendTimelineEntryCommand, DeleteTimelineEntryError, DeleteTimelineEntryUseCase,
    GetTimelineError, GetTimelineUseCase, RecordTimelineEntryCommand, RecordTimelineEntryError,
    RecordTimelineEntryUseCase, UpdateTimelineEntryError, UpdateTimelineEntryUseCase,
};
use crate::modules::timeline::application::ports::outgoing::TimelineEntryResult;

//
// ──────────────────────────────────────────────────────────
// TokenProvider stub
// ──────────────────────────────────────────────────────────
//

/// Gate stub: `accepting` resolves every bearer token to the given user id,
/// `rejecting` refuses every token.
#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: Option<Uuid>,
}

impl StubTokenProvider {
    pub fn accepting(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn rejecting() -> Self {
        Self { user_id: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        unimplemented!("Not used in route tests")
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        match self.user_id {
            Some(user_id) => Ok(TokenClaims {
                sub: user_id,
                exp: 9_999_999_999,
                iat: 0,
                nbf: 0,
                token_type: "access".to_string(),
            }),
            None => Err(TokenError::InvalidSignature),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Unimplemented use-case stubs (builder defaults)
// ──────────────────────────────────────────────────────────
//

pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginUserCommand) -> Result<AuthSession, LoginError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubFetchUserUseCase;

#[async_trait]
impl FetchUserUseCase for StubFetchUserUseCase {
    async fn execute(&self, _owner: UserId) -> Result<UserProfile, FetchUserError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubCreateSymptomLogUseCase;

#[async_trait]
impl CreateSymptomLogUseCase for StubCreateSymptomLogUseCase {
    async fn execute(
        &self,
        _command: LogSymptomsCommand,
    ) -> Result<SymptomLogResult, CreateSymptomLogError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubListSymptomLogsUseCase;

#[async_trait]
impl ListSymptomLogsUseCase for StubListSymptomLogsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _limit: Option<u64>,
    ) -> Result<Vec<SymptomLogResult>, ListSymptomLogsError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubUpdateSymptomLogUseCase;

#[async_trait]
impl UpdateSymptomLogUseCase for StubUpdateSymptomLogUseCase {
    async fn execute(
        &self,
        _command: AmendSymptomLogCommand,
    ) -> Result<SymptomLogResult, UpdateSymptomLogError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubDeleteSymptomLogUseCase;

#[async_trait]
impl DeleteSymptomLogUseCase for StubDeleteSymptomLogUseCase {
    async fn execute(&self, _id: Uuid, _owner: UserId) -> Result<(), DeleteSymptomLogError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubRecordTimelineEntryUseCase;

#[async_trait]
impl RecordTimelineEntryUseCase for StubRecordTimelineEntryUseCase {
    async fn execute(
        &self,
        _command: RecordTimelineEntryCommand,
    ) -> Result<TimelineEntryResult, RecordTimelineEntryError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubGetTimelineUseCase;

#[async_trait]
impl GetTimelineUseCase for StubGetTimelineUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<TimelineEntryResult>, GetTimelineError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubUpdateTimelineEntryUseCase;

#[async_trait]
impl UpdateTimelineEntryUseCase for StubUpdateTimelineEntryUseCase {
    async fn execute(
        &self,
        _command: AmendTimelineEntryCommand,
    ) -> Result<TimelineEntryResult, UpdateTimelineEntryError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubDeleteTimelineEntryUseCase;

#[async_trait]
impl DeleteTimelineEntryUseCase for StubDeleteTimelineEntryUseCase {
    async fn execute(&self, _id: Uuid, _owner: UserId) -> Result<(), DeleteTimelineEntryError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubScheduleAppointmentUseCase;

#[async_trait]
impl ScheduleAppointmentUseCase for StubScheduleAppointmentUseCase {
    async fn execute(
        &self,
        _command: ScheduleAppointmentCommand,
    ) -> Result<AppointmentResult, ScheduleAppointmentError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubListAppointmentsUseCase;

#[async_trait]
impl ListAppointmentsUseCase for StubListAppointmentsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<AppointmentResult>, ListAppointmentsError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubUpcomingAppointmentsUseCase;

#[async_trait]
impl UpcomingAppointmentsUseCase for StubUpcomingAppointmentsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<AppointmentResult>, ListAppointmentsError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubUpdateAppointmentUseCase;

#[async_trait]
impl UpdateAppointmentUseCase for StubUpdateAppointmentUseCase {
    async fn execute(
        &self,
        _command: AmendAppointmentCommand,
    ) -> Result<AppointmentResult, UpdateAppointmentError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubDeleteAppointmentUseCase;

#[async_trait]
impl DeleteAppointmentUseCase for StubDeleteAppointmentUseCase {
    async fn execute(&self, _id: Uuid, _owner: UserId) -> Result<(), DeleteAppointmentError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubAddHealthTaskUseCase;

#[async_trait]
impl AddHealthTaskUseCase for StubAddHealthTaskUseCase {
    async fn execute(
        &self,
        _command: AddHealthTaskCommand,
    ) -> Result<HealthTaskResult, AddHealthTaskError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubListHealthTasksUseCase;

#[async_trait]
impl ListHealthTasksUseCase for StubListHealthTasksUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<HealthTaskResult>, ListHealthTasksError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubUpdateHealthTaskUseCase;

#[async_trait]
impl UpdateHealthTaskUseCase for StubUpdateHealthTaskUseCase {
    async fn execute(
        &self,
        _command: AmendHealthTaskCommand,
    ) -> Result<HealthTaskResult, UpdateHealthTaskError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubDeleteHealthTaskUseCase;

#[async_trait]
impl DeleteHealthTaskUseCase for StubDeleteHealthTaskUseCase {
    async fn execute(&self, _id: Uuid, _owner: UserId) -> Result<(), DeleteHealthTaskError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubRecordExpenseUseCase;

#[async_trait]
impl RecordExpenseUseCase for StubRecordExpenseUseCase {
    async fn execute(
        &self,
        _command: RecordExpenseCommand,
    ) -> Result<ExpenseResult, RecordExpenseError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubListExpensesUseCase;

#[async_trait]
impl ListExpensesUseCase for StubListExpensesUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<ExpenseResult>, ListExpensesError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubUpdateExpenseUseCase;

#[async_trait]
impl UpdateExpenseUseCase for StubUpdateExpenseUseCase {
    async fn execute(
        &self,
        _command: AmendExpenseCommand,
    ) -> Result<ExpenseResult, UpdateExpenseError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubDeleteExpenseUseCase;

#[async_trait]
impl DeleteExpenseUseCase for StubDeleteExpenseUseCase {
    async fn execute(&self, _id: Uuid, _owner: UserId) -> Result<(), DeleteExpenseError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubGetInsightsUseCase;

#[async_trait]
impl GetInsightsUseCase for StubGetInsightsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<SymptomSummary, GetInsightsError> {
        unimplemented!("Not wired in this test")
    }
}

pub struct StubGenerateReportUseCase;

#[async_trait]
impl GenerateReportUseCase for StubGenerateReportUseCase {
    async fn execute(
        &self,
        _command: BuildReportCommand,
    ) -> Result<HealthReport, GenerateReportError> {
        unimplemented!("Not wired in this test")
    }
}
