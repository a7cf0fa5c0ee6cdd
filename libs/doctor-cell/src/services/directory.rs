use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{
    CreateDepartmentRequest, CreateDoctorRequest, Department, Doctor, DoctorError,
    UpdateDoctorRequest,
};

/// In-memory registry of departments and doctors. Reference data from the
/// booking engine's perspective: the appointment cell reads availability
/// templates and identities from here and never writes them.
pub struct DoctorDirectory {
    departments: RwLock<HashMap<Uuid, Department>>,
    doctors: RwLock<HashMap<Uuid, Doctor>>,
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self {
            departments: RwLock::new(HashMap::new()),
            doctors: RwLock::new(HashMap::new()),
        }
    }

    // Departments

    pub async fn create_department(&self, request: CreateDepartmentRequest) -> Department {
        let department = Department {
            id: Uuid::new_v4(),
            name: request.name,
            description: request.description,
            image_url: request.image_url,
        };

        info!("Creating department {} ({})", department.name, department.id);
        self.departments
            .write()
            .await
            .insert(department.id, department.clone());
        department
    }

    pub async fn get_department(&self, id: Uuid) -> Result<Department, DoctorError> {
        self.departments
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(DoctorError::DepartmentNotFound)
    }

    pub async fn list_departments(&self) -> Vec<Department> {
        let mut departments: Vec<Department> =
            self.departments.read().await.values().cloned().collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        departments
    }

    // Doctors

    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        debug!("Creating doctor profile for {}", request.name);

        request.availability.validate()?;

        if !self
            .departments
            .read()
            .await
            .contains_key(&request.department_id)
        {
            return Err(DoctorError::DepartmentNotFound);
        }

        let now = Utc::now();
        let doctor = Doctor {
            id: Uuid::new_v4(),
            name: request.name,
            department_id: request.department_id,
            specialization: request.specialization,
            image_url: request.image_url,
            availability: request.availability,
            created_at: now,
            updated_at: now,
        };

        self.doctors.write().await.insert(doctor.id, doctor.clone());
        info!("Doctor {} created with ID: {}", doctor.name, doctor.id);

        Ok(doctor)
    }

    pub async fn update_doctor(
        &self,
        id: Uuid,
        request: UpdateDoctorRequest,
    ) -> Result<Doctor, DoctorError> {
        debug!("Updating doctor: {}", id);

        if let Some(ref availability) = request.availability {
            availability.validate()?;
        }
        if let Some(department_id) = request.department_id {
            if !self.departments.read().await.contains_key(&department_id) {
                return Err(DoctorError::DepartmentNotFound);
            }
        }

        let mut doctors = self.doctors.write().await;
        let doctor = doctors.get_mut(&id).ok_or(DoctorError::NotFound)?;

        if let Some(name) = request.name {
            doctor.name = name;
        }
        if let Some(department_id) = request.department_id {
            doctor.department_id = department_id;
        }
        if let Some(specialization) = request.specialization {
            doctor.specialization = specialization;
        }
        if let Some(image_url) = request.image_url {
            doctor.image_url = Some(image_url);
        }
        if let Some(availability) = request.availability {
            doctor.availability = availability;
        }
        doctor.updated_at = Utc::now();

        Ok(doctor.clone())
    }

    pub async fn delete_doctor(&self, id: Uuid) -> Result<(), DoctorError> {
        debug!("Deleting doctor: {}", id);
        self.doctors
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(DoctorError::NotFound)
    }

    pub async fn get_doctor(&self, id: Uuid) -> Result<Doctor, DoctorError> {
        self.doctors
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(DoctorError::NotFound)
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        let mut doctors: Vec<Doctor> = self.doctors.read().await.values().cloned().collect();
        doctors.sort_by(|a, b| a.name.cmp(&b.name));
        doctors
    }

    pub async fn list_by_department(&self, department_id: Uuid) -> Vec<Doctor> {
        let mut doctors: Vec<Doctor> = self
            .doctors
            .read()
            .await
            .values()
            .filter(|doctor| doctor.department_id == department_id)
            .cloned()
            .collect();
        doctors.sort_by(|a, b| a.name.cmp(&b.name));
        doctors
    }
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        Self::new()
    }
}
