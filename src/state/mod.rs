mod notifications;

pub(crate) use notifications::NotificationStore;
