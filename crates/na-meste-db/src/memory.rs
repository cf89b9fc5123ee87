//! In-memory implementation of every repository trait.
//!
//! Mirrors the schema constraints: unique emails and college names, foreign keys
//! from users and attendances, `ON DELETE SET NULL` for a user's college and
//! `ON DELETE CASCADE` for attendances.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use na_meste_models::{
    Attendance, AttendanceId, College, CollegeId, NewAttendance, NewUser, User, UserId,
};

use crate::error::RepositoryError;
use crate::repositories::{AttendanceRepository, CollegeRepository, UserRepository};

#[derive(Default)]
struct Tables {
    next_id: i64,
    colleges: BTreeMap<CollegeId, College>,
    users: BTreeMap<UserId, User>,
    attendances: BTreeMap<AttendanceId, Attendance>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryDatabase {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict("users_email_key".to_string()));
        }
        if !tables.colleges.contains_key(&user.college_id) {
            return Err(RepositoryError::ForeignKey(
                "users_college_id_fkey".to_string(),
            ));
        }

        let created = User {
            id: UserId(tables.next_id()),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            college_id: Some(user.college_id),
        };
        tables.users.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn update(
        &self,
        id: UserId,
        username: Option<String>,
        email: Option<String>,
    ) -> Result<User, RepositoryError> {
        let mut tables = self.tables.write().await;

        if let Some(email) = &email {
            if tables
                .users
                .values()
                .any(|u| u.id != id && &u.email == email)
            {
                return Err(RepositoryError::Conflict("users_email_key".to_string()));
            }
        }

        let user = tables.users.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        if let Some(username) = username {
            user.username = username;
        }
        if let Some(email) = email {
            user.email = email;
        }

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<UserId, RepositoryError> {
        let mut tables = self.tables.write().await;

        tables.users.remove(&id).ok_or(RepositoryError::NotFound)?;
        tables.attendances.retain(|_, a| a.student_id != id);

        Ok(id)
    }
}

#[async_trait]
impl CollegeRepository for InMemoryDatabase {
    async fn create(&self, name: &str) -> Result<College, RepositoryError> {
        let mut tables = self.tables.write().await;

        if tables.colleges.values().any(|c| c.name == name) {
            return Err(RepositoryError::Conflict("colleges_name_key".to_string()));
        }

        let college = College {
            id: CollegeId(tables.next_id()),
            name: name.to_string(),
        };
        tables.colleges.insert(college.id, college.clone());

        Ok(college)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<College>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.colleges.values().find(|c| c.name == name).cloned())
    }

    async fn delete(&self, id: CollegeId) -> Result<CollegeId, RepositoryError> {
        let mut tables = self.tables.write().await;

        tables
            .colleges
            .remove(&id)
            .ok_or(RepositoryError::NotFound)?;
        for user in tables.users.values_mut() {
            if user.college_id == Some(id) {
                user.college_id = None;
            }
        }
        tables.attendances.retain(|_, a| a.college_id != id);

        Ok(id)
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryDatabase {
    async fn create(&self, attendance: NewAttendance) -> Result<Attendance, RepositoryError> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&attendance.student_id) {
            return Err(RepositoryError::ForeignKey(
                "attendances_student_id_fkey".to_string(),
            ));
        }
        if !tables.colleges.contains_key(&attendance.college_id) {
            return Err(RepositoryError::ForeignKey(
                "attendances_college_id_fkey".to_string(),
            ));
        }

        let created = Attendance {
            id: AttendanceId(tables.next_id()),
            student_id: attendance.student_id,
            college_id: attendance.college_id,
            date: attendance.date,
        };
        tables.attendances.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: AttendanceId) -> Result<Option<Attendance>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.attendances.get(&id).cloned())
    }

    async fn find_by_student_between(
        &self,
        student_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Attendance>, RepositoryError> {
        let tables = self.tables.read().await;

        let mut found: Vec<Attendance> = tables
            .attendances
            .values()
            .filter(|a| a.student_id == student_id && a.date >= start && a.date <= end)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

        Ok(found)
    }

    async fn delete(&self, id: AttendanceId) -> Result<AttendanceId, RepositoryError> {
        let mut tables = self.tables.write().await;

        tables
            .attendances
            .remove(&id)
            .map(|a| a.id)
            .ok_or(RepositoryError::NotFound)
    }
}
