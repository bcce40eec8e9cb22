// Mapper - Entity <-> DTO conversion
//
// Pure, stateless, infallible.

use crate::dto::EmployeeDto;
use crate::entities::Employee;

/// DTO → entity. The id is NOT copied: it is either assigned by the store or
/// already held by the entity the caller is updating.
pub fn to_entity(dto: EmployeeDto) -> Employee {
    Employee::new(dto.first_name, dto.last_name, dto.email)
}

/// Entity → DTO, copying id and values verbatim
pub fn to_dto(employee: Employee) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        first_name: employee.first_name,
        last_name: employee.last_name,
        email: employee.email,
    }
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        to_dto(employee)
    }
}
