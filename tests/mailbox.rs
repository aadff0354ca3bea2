mod tests {
    use touch_strip_controller::mailbox::{Mailbox, MailboxFull};

    #[test]
    fn test_push_and_take_in_order() {
        let mailbox: Mailbox<u8, 4> = Mailbox::new();
        mailbox.push(1).unwrap();
        mailbox.push(2).unwrap();
        assert_eq!(mailbox.take(), Some(1));
        assert_eq!(mailbox.take(), Some(2));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_push_fails_when_full() {
        let mailbox: Mailbox<u8, 1> = Mailbox::new();
        mailbox.push(1).unwrap();
        assert_eq!(mailbox.push(2), Err(MailboxFull(2)));
        assert_eq!(mailbox.take(), Some(1));
    }

    #[test]
    fn test_push_latest_evicts_stale_entries() {
        let mailbox: Mailbox<u8, 1> = Mailbox::new();
        mailbox.push_latest(1);
        mailbox.push_latest(2);
        mailbox.push_latest(3);
        assert_eq!(mailbox.take(), Some(3));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_sender_receiver_handles() {
        let mailbox: Mailbox<u8, 2> = Mailbox::new();
        let sender = mailbox.sender();
        let receiver = mailbox.receiver();
        sender.push(7).unwrap();
        sender.push_latest(8);
        assert_eq!(receiver.take(), Some(7));
        assert_eq!(receiver.take(), Some(8));
    }
}
