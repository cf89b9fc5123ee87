use anyhow::anyhow;
use tracing::{info, instrument};

use na_meste_core::AppError;
use na_meste_db::{AttendanceRepository, RepositoryError};
use na_meste_models::{
    Attendance, AttendanceRangeQuery, CollegeId, CreateAttendanceRequest, NewAttendance, UserId,
};

const STUDENT_FK: &str = "attendances_student_id_fkey";

pub struct AttendanceService;

impl AttendanceService {
    #[instrument(skip(attendances))]
    pub async fn create_attendance(
        attendances: &dyn AttendanceRepository,
        dto: CreateAttendanceRequest,
    ) -> Result<Attendance, AppError> {
        let date = dto
            .date
            .ok_or_else(|| AppError::bad_request(anyhow!("field date is a required field")))?;

        let new_attendance = NewAttendance {
            student_id: UserId(dto.student_id),
            college_id: CollegeId(dto.college_id),
            date,
        };

        let attendance = attendances
            .create(new_attendance)
            .await
            .map_err(|e| match e {
                RepositoryError::ForeignKey(constraint) if constraint == STUDENT_FK => {
                    AppError::bad_request(anyhow!("Student with this ID does not exist"))
                }
                RepositoryError::ForeignKey(_) => {
                    AppError::bad_request(anyhow!("College with this ID does not exist"))
                }
                e => AppError::internal_context(e, "Failed to create the attendance"),
            })?;

        info!(attendance_id = %attendance.id, "attendance has been created");
        Ok(attendance)
    }

    /// Attendances of one student between two inclusive bounds, oldest first.
    #[instrument(skip(attendances))]
    pub async fn get_attendances(
        attendances: &dyn AttendanceRepository,
        query: AttendanceRangeQuery,
    ) -> Result<Vec<Attendance>, AppError> {
        let (Some(start), Some(end)) = (query.start_date, query.end_date) else {
            return Err(AppError::bad_request(anyhow!(
                "field start_date and end_date are required"
            )));
        };

        if start > end {
            return Err(AppError::bad_request(anyhow!(
                "start date must not be after end date"
            )));
        }

        let found = attendances
            .find_by_student_between(UserId(query.student_id), start, end)
            .await
            .map_err(|e| AppError::internal_context(e, "Cannot get the attendances"))?;

        info!(count = found.len(), "attendances have been found");
        Ok(found)
    }
}
