mod credit;

pub use credit::{
    CreateCreditRequest, Credit, CreditCreatedResponse, CreditStatus, CreditView,
};
