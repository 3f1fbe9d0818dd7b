//! Course domain model and pricing.

use crate::{
    model::course::{CourseDto, CourseInfoForAdminDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub cost: i32,
    pub sale: i32,
    pub total_price: i32,
    pub users: i32,
    pub homework_count: i32,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            cost: entity.cost,
            sale: entity.sale,
            total_price: entity.total_price,
            users: entity.users,
            homework_count: entity.homework_count,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            cost: self.cost,
            sale: self.sale,
            total_price: self.total_price,
        }
    }

    pub fn into_admin_dto(self) -> CourseInfoForAdminDto {
        CourseInfoForAdminDto {
            id: self.id,
            name: self.name,
            cost: self.cost,
            users: self.users,
            dz: self.homework_count,
            sale: self.sale,
            total: self.total_price,
        }
    }
}

/// Price after discount.
///
/// The discount is taken as an absolute percentage and the result truncated toward zero,
/// so a cost of 999 with 15% off costs 849.
pub fn discounted_price(cost: i32, sale: i32) -> i32 {
    if sale == 0 {
        return cost;
    }

    let discount = f64::from(cost) * f64::from(sale.unsigned_abs()) / 100.0;
    (f64::from(cost) - discount) as i32
}

#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub name: String,
    pub cost: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateCourseParam {
    pub id: i32,
    pub name: String,
    pub cost: i32,
    pub sale: i32,
}

/// Trims a display name and rejects empty ones.
pub fn required_name(name: &str, what: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(format!("{} name is required", what)));
    }
    Ok(name.to_string())
}
