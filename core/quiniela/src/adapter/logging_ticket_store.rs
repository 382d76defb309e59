//! ジュガダ保存をログに記録する TicketStore のラッパ

use crate::domain::TicketRecord;
use crate::ports::outbound::TicketStore;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct LoggingTicketStore {
    inner: Arc<dyn TicketStore>,
    log: Arc<dyn Log>,
}

impl LoggingTicketStore {
    pub fn new(inner: Arc<dyn TicketStore>, log: Arc<dyn Log>) -> Self {
        Self { inner, log }
    }
}

impl TicketStore for LoggingTicketStore {
    fn append(&self, collection: &str, record: &TicketRecord) -> Result<(), Error> {
        let result = self.inner.append(collection, record);
        let (level, message) = match &result {
            Ok(()) => (LogLevel::Info, "ticket stored".to_string()),
            Err(e) => (LogLevel::Error, format!("ticket store failed: {}", e)),
        };
        let _ = self.log.log(
            &LogRecord::new(level, message)
                .layer("adapter")
                .kind("store")
                .field("collection", collection)
                .field("secuencia", record.secuencia.as_str())
                .field("lines", record.jugadas.len()),
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BetLine, DrawCode, DrawSlot, Region, RegionCode, RegionSelection, Sequence};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CaptureLog(Mutex<Vec<LogRecord>>);

    impl Log for CaptureLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct FailingStore;

    impl TicketStore for FailingStore {
        fn append(&self, _collection: &str, _record: &TicketRecord) -> Result<(), Error> {
            Err(Error::persistence("offline"))
        }
    }

    #[test]
    fn test_failure_is_logged_and_propagated() {
        let log = Arc::new(CaptureLog::default());
        let store = LoggingTicketStore::new(Arc::new(FailingStore), log.clone());
        let regions: RegionSelection = [RegionCode::from(Region::Nacion)].into_iter().collect();
        let record = TicketRecord::build(
            &Sequence::from_counter(10_000).unwrap(),
            "a1",
            &DrawCode::from(DrawSlot::Primera),
            &regions,
            &[BetLine::new("1", "1", "1")],
            dec!(1),
            "t",
        )
        .unwrap();
        let err = store.append("JUGADAS DE Ana", &record).unwrap_err();
        assert_eq!(err, Error::persistence("offline"));

        let records = log.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Error);
        let fields = records[0].fields.as_ref().unwrap();
        assert_eq!(fields["collection"], "JUGADAS DE Ana");
        assert_eq!(fields["secuencia"], "000010000");
    }
}
