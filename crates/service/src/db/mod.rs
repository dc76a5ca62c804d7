pub mod cheque_service;
