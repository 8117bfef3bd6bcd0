use actix_web::web;
use std::sync::Arc;

use crate::modules::appointment::application::ports::incoming::use_cases::{
    AppointmentUseCases, DeleteAppointmentUseCase, ListAppointmentsUseCase,
    ScheduleAppointmentUseCase, UpcomingAppointmentsUseCase, UpdateAppointmentUseCase,
};
use crate::modules::auth::application::ports::incoming::use_cases::{
    FetchUserUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateProfileUseCase,
};
use crate::modules::expense::application::ports::incoming::use_cases::{
    DeleteExpenseUseCase, ExpenseUseCases, ListExpensesUseCase, RecordExpenseUseCase,
    UpdateExpenseUseCase,
};
use crate::modules::health_task::application::ports::incoming::use_cases::{
    AddHealthTaskUseCase, DeleteHealthTaskUseCase, HealthTaskUseCases, ListHealthTasksUseCase,
    UpdateHealthTaskUseCase,
};
use crate::modules::insights::application::ports::incoming::use_cases::GetInsightsUseCase;
use crate::modules::report::application::ports::incoming::use_cases::GenerateReportUseCase;
use crate::modules::symptom_log::application::ports::incoming::use_cases::{
    CreateSymptomLogUseCase, DeleteSymptomLogUseCase, ListSymptomLogsUseCase, SymptomLogUseCases,
    UpdateSymptomLogUseCase,
};
use crate::modules::timeline::application::ports::incoming::use_cases::{
    DeleteTimelineEntryUseCase, GetTimelineUseCase, RecordTimelineEntryUseCase, TimelineUseCases,
    UpdateTimelineEntryUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// AppState for route tests: every slot defaults to an unimplemented stub so
/// a test only wires the use case it exercises.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn RegisterUserUseCase>,
    login_user: Arc<dyn LoginUserUseCase>,
    fetch_user: Arc<dyn FetchUserUseCase>,
    update_profile: Arc<dyn UpdateProfileUseCase>,
    symptom_logs: SymptomLogUseCases,
    timeline: TimelineUseCases,
    appointments: AppointmentUseCases,
    health_tasks: HealthTaskUseCases,
    expenses: ExpenseUseCases,
    get_insights: Arc<dyn GetInsightsUseCase>,
    generate_report: Arc<dyn GenerateReportUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            fetch_user: Arc::new(StubFetchUserUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            symptom_logs: SymptomLogUseCases {
                create: Arc::new(StubCreateSymptomLogUseCase),
                list: Arc::new(StubListSymptomLogsUseCase),
                update: Arc::new(StubUpdateSymptomLogUseCase),
                delete: Arc::new(StubDeleteSymptomLogUseCase),
            },
            timeline: TimelineUseCases {
                record: Arc::new(StubRecordTimelineEntryUseCase),
                list: Arc::new(StubGetTimelineUseCase),
                update: Arc::new(StubUpdateTimelineEntryUseCase),
                delete: Arc::new(StubDeleteTimelineEntryUseCase),
            },
            appointments: AppointmentUseCases {
                schedule: Arc::new(StubScheduleAppointmentUseCase),
                list: Arc::new(StubListAppointmentsUseCase),
                upcoming: Arc::new(StubUpcomingAppointmentsUseCase),
                update: Arc::new(StubUpdateAppointmentUseCase),
                delete: Arc::new(StubDeleteAppointmentUseCase),
            },
            health_tasks: HealthTaskUseCases {
                add: Arc::new(StubAddHealthTaskUseCase),
                list: Arc::new(StubListHealthTasksUseCase),
                update: Arc::new(StubUpdateHealthTaskUseCase),
                delete: Arc::new(StubDeleteHealthTaskUseCase),
            },
            expenses: ExpenseUseCases {
                record: Arc::new(StubRecordExpenseUseCase),
                list: Arc::new(StubListExpensesUseCase),
                update: Arc::new(StubUpdateExpenseUseCase),
                delete: Arc::new(StubDeleteExpenseUseCase),
            },
            get_insights: Arc::new(StubGetInsightsUseCase),
            generate_report: Arc::new(StubGenerateReportUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user(mut self, uc: impl FetchUserUseCase + 'static) -> Self {
        self.fetch_user = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_create_symptom_log(mut self, uc: impl CreateSymptomLogUseCase + 'static) -> Self {
        self.symptom_logs.create = Arc::new(uc);
        self
    }

    pub fn with_list_symptom_logs(mut self, uc: impl ListSymptomLogsUseCase + 'static) -> Self {
        self.symptom_logs.list = Arc::new(uc);
        self
    }

    pub fn with_update_symptom_log(mut self, uc: impl UpdateSymptomLogUseCase + 'static) -> Self {
        self.symptom_logs.update = Arc::new(uc);
        self
    }

    pub fn with_delete_symptom_log(mut self, uc: impl DeleteSymptomLogUseCase + 'static) -> Self {
        self.symptom_logs.delete = Arc::new(uc);
        self
    }

    pub fn with_record_timeline_entry(
        mut self,
        uc: impl RecordTimelineEntryUseCase + 'static,
    ) -> Self {
        self.timeline.record = Arc::new(uc);
        self
    }

    pub fn with_get_timeline(mut self, uc: impl GetTimelineUseCase + 'static) -> Self {
        self.timeline.list = Arc::new(uc);
        self
    }

    pub fn with_schedule_appointment(
        mut self,
        uc: impl ScheduleAppointmentUseCase + 'static,
    ) -> Self {
        self.appointments.schedule = Arc::new(uc);
        self
    }

    pub fn with_upcoming_appointments(
        mut self,
        uc: impl UpcomingAppointmentsUseCase + 'static,
    ) -> Self {
        self.appointments.upcoming = Arc::new(uc);
        self
    }

    pub fn with_add_health_task(mut self, uc: impl AddHealthTaskUseCase + 'static) -> Self {
        self.health_tasks.add = Arc::new(uc);
        self
    }

    pub fn with_record_expense(mut self, uc: impl RecordExpenseUseCase + 'static) -> Self {
        self.expenses.record = Arc::new(uc);
        self
    }

    pub fn with_get_insights(mut self, uc: impl GetInsightsUseCase + 'static) -> Self {
        self.get_insights = Arc::new(uc);
        self
    }

    pub fn with_generate_report(mut self, uc: impl GenerateReportUseCase + 'static) -> Self {
        self.generate_report = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            fetch_user_use_case: self.fetch_user,
            update_profile_use_case: self.update_profile,
            symptom_logs: self.symptom_logs,
            timeline: self.timeline,
            appointments: self.appointments,
            health_tasks: self.health_tasks,
            expenses: self.expenses,
            get_insights_use_case: self.get_insights,
            generate_report_use_case: self.generate_report,
        })
    }
}
