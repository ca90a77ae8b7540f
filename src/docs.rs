use utoipa::OpenApi;

use crate::api::attendance::{AttendanceForm, AttendanceUpdateForm};
use crate::api::department::DepartmentForm;
use crate::api::employee::EmployeeForm;
use crate::model::attendance::Attendance;
use crate::model::department::Department;
use crate::model::employee::Employee;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orgtrack API",
        version = "1.0.0",
        description = r#"
## Organization record manager

Tracks departments, employees, and attendance.

### Resources
- **Departments** — create, list, edit, delete (cascades to employees and their attendance)
- **Employees** — create, list with name filter, edit, delete (cascades to attendance)
- **Attendance** — create, list with employee filter, edit, delete

### Conventions
- Write endpoints accept form-encoded bodies and answer `303 See Other` to the listing page
- Lookups by unknown id answer 404; constraint violations answer 500

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::department::show_departments,
        crate::api::department::add_department_form,
        crate::api::department::add_department,
        crate::api::department::edit_department_form,
        crate::api::department::edit_department,
        crate::api::department::delete_department_form,
        crate::api::department::delete_department,

        crate::api::employee::list_employees,
        crate::api::employee::add_employee_form,
        crate::api::employee::add_employee,
        crate::api::employee::edit_employee_form,
        crate::api::employee::edit_employee,
        crate::api::employee::delete_employee_form,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::add_attendance_form,
        crate::api::attendance::add_attendance,
        crate::api::attendance::edit_attendance_form,
        crate::api::attendance::edit_attendance,
        crate::api::attendance::delete_attendance_form,
        crate::api::attendance::delete_attendance
    ),
    components(
        schemas(
            Department,
            DepartmentForm,
            Employee,
            EmployeeForm,
            Attendance,
            AttendanceForm,
            AttendanceUpdateForm
        )
    ),
    tags(
        (name = "Department", description = "Department records"),
        (name = "Employee", description = "Employee records"),
        (name = "Attendance", description = "Attendance records"),
    )
)]
pub struct ApiDoc;
