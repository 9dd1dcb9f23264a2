use alloy::sol;
use serde::{Deserialize, Serialize};

sol! {
    /// Leading fields of a CCTP message after every packed integer has been
    /// widened to a full word.
    #[derive(Debug)]
    struct PaddedMessageHeader {
        uint32 version;
        uint32 sourceDomain;
        uint32 destinationDomain;
        uint64 nonce;
        bytes32 sender;
        bytes32 recipient;
        bytes32 destinationCaller;
    }

    interface IMessageTransmitter {
        #[derive(Debug, Deserialize, Serialize)]
        event MessageSent(bytes message);

        #[derive(Debug, Deserialize, Serialize)]
        event MessageReceived(
            address indexed caller,
            uint32 sourceDomain,
            uint64 indexed nonce,
            bytes32 sender,
            bytes messageBody
        );
    }

    interface IFiatToken {
        #[derive(Debug, Deserialize, Serialize)]
        event Burn(address indexed burner, uint256 amount);
    }
}
